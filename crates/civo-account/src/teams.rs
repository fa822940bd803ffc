//! Team and membership endpoints.

use crate::models::{Team, TeamMember};
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Error, Route, SimpleResponse, Transport};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct MemberBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    permissions: &'a str,
    roles: &'a str,
}

/// Client for `/teams`.
#[derive(Debug, Clone)]
pub struct TeamsApi {
    transport: Transport,
}

impl TeamsApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List teams.
    pub async fn list(&self) -> Result<Vec<Team>> {
        self.transport.get(Route::new("/teams")).await
    }

    /// Create a team.
    pub async fn create(&self, name: &str) -> Result<Team> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        self.transport
            .post(Route::new("/teams"), &NameBody { name })
            .await
    }

    /// First team whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<Team> {
        find(self, search).await
    }

    /// Rename a team.
    pub async fn rename(&self, id: &str, name: &str) -> Result<Team> {
        if name.is_empty() {
            return Err(Error::required("name"));
        }
        self.transport
            .put(Route::new("/teams/:id").param("id", id), &NameBody { name })
            .await
    }

    /// Delete a team.
    pub async fn destroy(&self, id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(Route::new("/teams/:id").param("id", id))
            .await
    }

    /// List a team's members.
    pub async fn list_members(&self, team_id: &str) -> Result<Vec<TeamMember>> {
        self.transport.get(members_route(team_id)).await
    }

    /// Add a user to a team.
    pub async fn add_member(
        &self,
        team_id: &str,
        user_id: &str,
        permissions: &str,
        roles: &str,
    ) -> Result<Vec<TeamMember>> {
        if user_id.is_empty() {
            return Err(Error::required("user_id"));
        }
        let body = member_body(Some(user_id), permissions, roles)?;

        info!(team = team_id, user = user_id, "Adding team member");
        self.transport.post(members_route(team_id), &body).await
    }

    /// Replace a member's permissions and roles.
    pub async fn update_member(
        &self,
        team_id: &str,
        member_id: &str,
        permissions: &str,
        roles: &str,
    ) -> Result<TeamMember> {
        let body = member_body(None, permissions, roles)?;
        self.transport
            .put(member_route(team_id, member_id), &body)
            .await
    }

    /// Remove a member from a team.
    pub async fn destroy_member(&self, team_id: &str, member_id: &str) -> Result<SimpleResponse> {
        self.transport
            .delete(member_route(team_id, member_id))
            .await
    }
}

fn member_body<'a>(
    user_id: Option<&'a str>,
    permissions: &'a str,
    roles: &'a str,
) -> Result<MemberBody<'a>> {
    if permissions.is_empty() {
        return Err(Error::required("permissions"));
    }
    if roles.is_empty() {
        return Err(Error::required("roles"));
    }
    Ok(MemberBody {
        user_id,
        permissions,
        roles,
    })
}

fn members_route(team_id: &str) -> Route {
    Route::new("/teams/:team_id/members").param("team_id", team_id)
}

fn member_route(team_id: &str, member_id: &str) -> Route {
    Route::new("/teams/:team_id/members/:member_id")
        .param("team_id", team_id)
        .param("member_id", member_id)
}

#[async_trait]
impl Findable for TeamsApi {
    type Item = Team;

    async fn list_items(&self) -> Result<Vec<Team>> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civo_core::CivoConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> TeamsApi {
        let config = CivoConfig::new("test-key")
            .unwrap()
            .with_api_url(server.uri());
        TeamsApi::new(Transport::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn find_team() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "team-1", "name": "Owners"},
                {"id": "team-2", "name": "Developers", "created_at": "2024-01-01T00:00:00Z"}
            ])))
            .mount(&server)
            .await;

        let team = api(&server).find("devel").await.unwrap();
        assert_eq!(team.id, "team-2");
    }

    #[tokio::test]
    async fn add_member() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/teams/team-2/members"))
            .and(body_json(json!({
                "user_id": "user-9",
                "permissions": "instance.create,kubernetes.*",
                "roles": "role-1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "member-1", "team_id": "team-2", "user_id": "user-9", "roles": "role-1"}
            ])))
            .mount(&server)
            .await;

        let members = api(&server)
            .add_member("team-2", "user-9", "instance.create,kubernetes.*", "role-1")
            .await
            .unwrap();
        assert_eq!(members[0].user_id.as_deref(), Some("user-9"));
    }

    #[tokio::test]
    async fn update_member_omits_user() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v2/teams/team-2/members/member-1"))
            .and(body_json(json!({"permissions": "*", "roles": "role-2"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "member-1", "permissions": "*", "roles": "role-2"
            })))
            .mount(&server)
            .await;

        let member = api(&server)
            .update_member("team-2", "member-1", "*", "role-2")
            .await
            .unwrap();
        assert_eq!(member.roles.as_deref(), Some("role-2"));
    }

    #[tokio::test]
    async fn member_checks_run_before_requests() {
        let server = MockServer::start().await;
        let api = api(&server);

        assert_eq!(
            api.add_member("team-2", "", "*", "role-1").await.unwrap_err(),
            Error::required("user_id")
        );
        assert_eq!(
            api.update_member("team-2", "member-1", "*", "").await.unwrap_err(),
            Error::required("roles")
        );
        assert_eq!(
            api.destroy_member("team-2", "").await.unwrap_err(),
            Error::required("member_id")
        );
    }
}

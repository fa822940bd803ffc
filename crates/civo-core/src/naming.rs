//! Generated default names.

use uuid::Uuid;

/// Random name such as `civo-3f9a1c2b`.
#[must_use]
pub fn random_name(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &id[..8])
}

#[cfg(test)]
mod tests {
    use super::random_name;

    #[test]
    fn random_names_differ() {
        let a = random_name("civo");
        let b = random_name("civo");
        assert!(a.starts_with("civo-"));
        assert_eq!(a.len(), "civo-".len() + 8);
        assert_ne!(a, b);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub display_name: String,
    pub initial: char,
    pub signed_in: bool,
}

// Providers sometimes hand back an email address as the display name;
// everything before the '@' is treated as the name in that case.
pub fn derive_profile(identity: Option<&UserIdentity>) -> ProfileView {
    let raw = identity
        .map(|user| user.display_name.split('@').next().unwrap_or(""))
        .unwrap_or("");
    let display_name = if raw.is_empty() {
        "User".to_string()
    } else {
        raw.to_string()
    };
    let initial = display_name
        .chars()
        .next()
        .and_then(|first| first.to_uppercase().next())
        .unwrap_or('U');
    ProfileView {
        display_name,
        initial,
        signed_in: identity.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::derive_profile;
    use super::ProfileView;
    use super::UserIdentity;
    use pretty_assertions::assert_eq;

    fn identity(display_name: &str) -> UserIdentity {
        UserIdentity {
            id: "u1".to_string(),
            display_name: display_name.to_string(),
        }
    }

    #[test]
    fn named_user_projects_name_and_initial() {
        let user = identity("maya");
        assert_eq!(
            derive_profile(Some(&user)),
            ProfileView {
                display_name: "maya".to_string(),
                initial: 'M',
                signed_in: true,
            }
        );
    }

    #[test]
    fn email_display_names_use_the_local_part() {
        let user = identity("sam.ortiz@school.edu");
        let profile = derive_profile(Some(&user));
        assert_eq!(profile.display_name, "sam.ortiz");
        assert_eq!(profile.initial, 'S');
    }

    #[test]
    fn missing_or_empty_identity_falls_back() {
        let anonymous = derive_profile(None);
        assert_eq!(anonymous.display_name, "User");
        assert_eq!(anonymous.initial, 'U');
        assert!(!anonymous.signed_in);

        let blank = identity("");
        let profile = derive_profile(Some(&blank));
        assert_eq!(profile.display_name, "User");
        assert_eq!(profile.initial, 'U');
        assert!(profile.signed_in);
    }
}

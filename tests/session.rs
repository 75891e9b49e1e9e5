#[cfg(test)]
mod tests {
    use taskeasy::libs::session::Session;

    #[test]
    fn test_session_starts_anonymous() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);
        assert_eq!(session.user_name(), None);
    }

    #[test]
    fn test_login_then_logout_round_trip() {
        let mut session = Session::new();

        session.login(7, "ana".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.user_id(), Some(7));
        assert_eq!(session.user_name(), Some("ana"));

        session.logout();
        assert_eq!(session, Session::Anonymous);
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_login_replaces_previous_user() {
        let mut session = Session::new();

        session.login(1, "ana".to_string());
        session.login(2, "bruno".to_string());
        assert_eq!(session.user_id(), Some(2));
        assert_eq!(session.user_name(), Some("bruno"));
    }
}

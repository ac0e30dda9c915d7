#[cfg(test)]
mod tests {
    use crate::core::forms::{LOGIN_SUCCESS, REGISTER_SUCCESS, login_outcome, register_outcome};
    use crate::core::scroll::{is_header_scrolled, is_scroll_top_visible};
    use crate::core::session::{clear_session, load_session};
    use crate::core::storage::{SESSION_KEY, StorageError};
    use crate::core::{
        Carousel, CounterAnimation, CounterTarget, KeyValueStore, LoginInput, MemoryStore,
        NavState, NotificationKind, RegisterInput, SearchOutcome, search_services,
    };

    /// Store standing in for a browser with storage disabled
    struct DisabledStore;

    impl KeyValueStore for DisabledStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn registration(password: &str, confirm_password: &str) -> RegisterInput {
        RegisterInput {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    #[test]
    fn test_scroll_markers_follow_offset() {
        for offset in (0..1000).step_by(25).map(f64::from) {
            assert_eq!(is_header_scrolled(offset), offset >= 100.0);
            assert_eq!(is_scroll_top_visible(offset), offset >= 300.0);
        }
    }

    #[test]
    fn test_nav_double_toggle() {
        for start_open in [false, true] {
            let mut nav = NavState::default();
            if start_open {
                nav.toggle();
            }
            let before = (nav.is_open(), nav.scroll_locked());

            nav.toggle();
            nav.toggle();

            assert_eq!((nav.is_open(), nav.scroll_locked()), before);
        }
    }

    #[test]
    fn test_login_success_persists_session() {
        let store = MemoryStore::new();
        let outcome = login_outcome(&store, &LoginInput::new("a@b.com", "x"));

        assert_eq!(outcome.notification.kind, NotificationKind::Success);
        assert_eq!(outcome.notification.message, LOGIN_SUCCESS);
        assert!(outcome.redirects());
        assert!(outcome.persist_error.is_none());

        let user = load_session(&store).unwrap().unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(outcome.user, Some(user));
    }

    #[test]
    fn test_login_with_empty_password_persists_nothing() {
        let store = MemoryStore::new();
        let outcome = login_outcome(&store, &LoginInput::new("a@b.com", ""));

        assert_eq!(outcome.notification.kind, NotificationKind::Error);
        assert_eq!(outcome.notification.message, "Please fill in all fields.");
        assert!(!outcome.redirects());
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_login_without_storage_still_signs_in() {
        let outcome = login_outcome(&DisabledStore, &LoginInput::new("a@b.com", "x"));

        assert_eq!(outcome.notification.kind, NotificationKind::Success);
        assert!(outcome.redirects());
        assert!(matches!(
            outcome.persist_error,
            Some(StorageError::Unavailable)
        ));
    }

    #[test]
    fn test_logout_clears_restored_session() {
        let store = MemoryStore::new();
        assert!(login_outcome(&store, &LoginInput::new("a@b.com", "x")).redirects());
        assert!(load_session(&store).unwrap().is_some());

        clear_session(&store).unwrap();
        assert!(load_session(&store).unwrap().is_none());
    }

    #[test]
    fn test_registration_mismatch_keeps_fields() {
        let outcome = register_outcome(&registration("p1", "p2"));

        assert_eq!(outcome.notification.kind, NotificationKind::Error);
        assert_eq!(outcome.notification.message, "Passwords do not match.");
        assert!(!outcome.reset);
    }

    #[test]
    fn test_registration_success_resets_form() {
        let outcome = register_outcome(&registration("p1", "p1"));

        assert_eq!(outcome.notification.kind, NotificationKind::Success);
        assert_eq!(outcome.notification.message, REGISTER_SUCCESS);
        assert!(outcome.reset);
    }

    #[test]
    fn test_search_scenarios() {
        assert_eq!(
            search_services("SEO"),
            SearchOutcome::Matches(vec!["SEO Optimization Services"])
        );
        assert_eq!(search_services("zzz"), SearchOutcome::NoResults);
        assert_eq!(search_services("e"), SearchOutcome::Hidden);
    }

    #[test]
    fn test_counter_scenario() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("156+").unwrap());
        let mut frames = Vec::new();
        while !animation.is_finished() {
            frames.push(animation.tick());
        }

        assert_eq!(frames.last().map(String::as_str), Some("156+"));
        assert_eq!(frames.first().map(String::as_str), Some("1+"));
    }

    #[test]
    fn test_carousel_scenario() {
        let mut carousel = Carousel::new(3).unwrap();
        let mut indices = Vec::new();
        for _ in 0..6 {
            carousel.advance();
            indices.push(carousel.current());
        }
        assert_eq!(indices, vec![1, 2, 0, 1, 2, 0]);

        carousel.go_to(2);
        assert!((0..3).all(|i| carousel.is_active(i) == (i == 2)));
    }
}

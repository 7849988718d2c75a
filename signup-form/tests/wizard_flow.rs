use signup_form::prelude::*;
use signup_form::{validate, NumberInput};

#[cfg(test)]
mod full_flow_tests {
    use super::*;

    fn walk_and_fill(manager: &mut SignupManager) {
        let entries: [(Field, &str); 9] = [
            (Field::Username, "Ana"),
            (Field::Lastname, "Ruiz"),
            (Field::Age, "30"),
            (Field::Phone, "5551234"),
            (Field::Country, "MX"),
            (Field::City, "CDMX"),
            (Field::Email, "ana@example.com"),
            (Field::Password, "p1"),
            (Field::ConfirmPassword, "p1"),
        ];

        // Fill each step's fields, then press "Siguiente"
        for step in Step::all() {
            assert_eq!(manager.state().current_step, step);
            for field in step.fields() {
                let (_, value) = entries.iter().find(|(f, _)| f == field).unwrap();
                manager.dispatch(FormAction::set(*field, *value));
            }
            if !step.is_last() {
                manager.dispatch(FormAction::Advance);
            }
            manager.process_all();
        }
    }

    #[test]
    fn test_fill_every_step_and_submit() {
        let mut manager = SignupManager::new();
        walk_and_fill(&mut manager);

        assert!(manager.state().can_submit);
        manager.dispatch(FormAction::Submit);
        manager.process_all();

        let state = manager.state();
        let snapshot = state.snapshot().expect("summary is showing");
        let expected = FormValues {
            username: "Ana".into(),
            lastname: "Ruiz".into(),
            age: NumberInput::from(30_i64),
            phone: NumberInput::from(5551234_i64),
            country: "MX".into(),
            city: "CDMX".into(),
            email: "ana@example.com".into(),
            password: "p1".into(),
            confirm_password: "p1".into(),
        };
        assert_eq!(snapshot, &expected);

        let shown: Vec<String> = snapshot.summary_rows().into_iter().map(|(_, v)| v).collect();
        assert_eq!(
            shown,
            vec!["Ana", "Ruiz", "30", "5551234", "MX", "CDMX", "ana@example.com"]
        );
    }

    #[test]
    fn test_edit_then_resubmit_with_changes() {
        let mut manager = SignupManager::new();
        walk_and_fill(&mut manager);
        manager.dispatch(FormAction::Submit);
        manager.dispatch(FormAction::Edit);
        manager.dispatch(FormAction::set(Field::City, "Guadalajara"));
        manager.dispatch(FormAction::Submit);
        manager.process_all();

        let events = manager.take_events();
        assert_eq!(
            events.iter().filter(|e| **e == FormEvent::Submitted).count(),
            2
        );
        assert!(events.contains(&FormEvent::Edited));
        assert_eq!(
            manager.state().snapshot().map(|s| s.city.as_str()),
            Some("Guadalajara")
        );
    }

    #[test]
    fn test_confirm_matches_fresh_load() {
        let mut manager = SignupManager::new();
        walk_and_fill(&mut manager);
        manager.dispatch(FormAction::Submit);
        manager.dispatch(FormAction::ConfirmAnyway);
        manager.process_all();

        let fresh = SignupManager::new();
        assert_eq!(manager.state(), fresh.state());
        assert!(manager.take_events().contains(&FormEvent::ReloadRequested));
    }
}

#[cfg(test)]
mod validator_tests {
    use super::*;

    #[test]
    fn test_pure_validator_matches_manager_state() {
        let mut manager = SignupManager::new();
        manager.dispatch(FormAction::set(Field::Email, "not-an-email"));
        manager.process_all();

        let report = validate(&manager.state().values);
        assert_eq!(report, manager.state().validation);
        assert_eq!(report.error(Field::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn test_messages_are_the_inline_text() {
        let report = validate(&FormValues::default());
        let messages: Vec<String> = report.errors().map(|(_, e)| e.to_string()).collect();
        assert!(messages.contains(&"El país es obligatorio".to_string()));
        assert!(messages.contains(&"La contraseña es obligatoria".to_string()));
    }
}

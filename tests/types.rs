// ABOUTME: Integration tests for identifiers, task definitions, and descriptors.
// ABOUTME: Tests validation and serialization properties.

use steward::types::*;

mod task_definition_tests {
    use super::*;

    #[test]
    fn accepts_short_name() {
        let td = TaskDefinition::new("web:1").unwrap();
        assert_eq!(td.as_str(), "web:1");
        assert_eq!(td.to_string(), "web:1");
    }

    #[test]
    fn accepts_full_arn() {
        let arn = "arn:aws:ecs:us-east-1:12345678912:task-definition/web:1";
        assert_eq!(TaskDefinition::new(arn).unwrap().as_str(), arn);
    }

    #[test]
    fn empty_returns_error() {
        assert_eq!(TaskDefinition::new(""), Err(TaskDefinitionError::Empty));
    }

    #[test]
    fn parses_via_from_str() {
        let td: TaskDefinition = "api:3".parse().unwrap();
        assert_eq!(td.as_str(), "api:3");
        assert!("".parse::<TaskDefinition>().is_err());
    }
}

mod id_tests {
    use super::*;

    #[test]
    fn deployment_id_stores_value() {
        let id = DeploymentId::new("dep-1");
        assert_eq!(id.as_str(), "dep-1");
        assert_eq!(id.clone().into_inner(), "dep-1");
    }

    #[test]
    fn task_arn_stores_value() {
        let arn = TaskArn::new("task/abc".to_string());
        assert_eq!(arn.to_string(), "task/abc");
    }

    #[test]
    fn instance_arn_stores_value() {
        let arn = InstanceArn::new("container-instance/xyz");
        assert_eq!(arn.as_str(), "container-instance/xyz");
    }
}

mod descriptor_tests {
    use super::*;

    #[test]
    fn task_builder_sets_optional_fields() {
        let task = Task::new("task/a", "web:1")
            .on_instance("container-instance/i-1")
            .with_status("RUNNING");

        assert_eq!(task.arn.as_str(), "task/a");
        assert_eq!(
            task.container_instance,
            Some(InstanceArn::new("container-instance/i-1"))
        );
        assert_eq!(task.last_status.as_deref(), Some("RUNNING"));
    }

    #[test]
    fn task_omits_unset_fields_in_json() {
        let json = serde_json::to_value(Task::new("task/a", "web:1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"arn": "task/a", "task_definition": "web:1"})
        );
    }

    #[test]
    fn failure_reads_reason() {
        let failure: Failure =
            serde_json::from_str(r#"{"arn": "container-instance/i-1", "reason": "MISSING"}"#)
                .unwrap();
        assert_eq!(failure, Failure::new("container-instance/i-1").with_reason("MISSING"));
    }
}

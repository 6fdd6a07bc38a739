//! Property tests for naming, validation and list handling.

use paramstore::error::{ConfigError, Error, ValidationError};
use paramstore::{
    arn_for_parameter_name, value_for_string_parameter, Environment, Parameter, Stack,
    StringListParameter, StringListParameterProps, StringParameter, StringParameterProps, Token,
    Value,
};
use proptest::prelude::*;

fn stack() -> Stack {
    Stack::new(
        "Prop",
        Environment::new(
            Some("123456789012".into()),
            Some("us-east-1".into()),
            Some("aws".into()),
        ),
    )
}

const PREFIX: &str = "arn:aws:ssm:us-east-1:123456789012:parameter";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn path_names_get_no_separator(name in "(/[a-zA-Z0-9_.-]{1,12}){1,4}") {
        let stack = stack();
        let arn = arn_for_parameter_name(&stack, &Value::Known(name.clone()), None).unwrap();
        prop_assert_eq!(arn, Value::Known(format!("{}{}", PREFIX, name)));
    }

    #[test]
    fn simple_names_get_slash(name in "[a-zA-Z0-9_.-]{1,40}") {
        let stack = stack();
        let arn = arn_for_parameter_name(&stack, &Value::Known(name.clone()), None).unwrap();
        prop_assert_eq!(arn, Value::Known(format!("{}/{}", PREFIX, name)));
    }

    #[test]
    fn deferred_names_need_explicit_separator(logical in "[A-Z][a-zA-Z0-9]{0,20}") {
        let stack = stack();
        let name = Value::Deferred(Token::Ref(logical));
        let err = arn_for_parameter_name(&stack, &name, None).unwrap_err();
        prop_assert!(matches!(err, Error::Config(ConfigError::AmbiguousSeparator { .. })), "expected AmbiguousSeparator");
    }

    #[test]
    fn list_round_trips(elements in prop::collection::vec("[a-z0-9-]{1,10}", 1..8)) {
        let mut stack = stack();
        let list = StringListParameter::new(
            &mut stack,
            "List",
            StringListParameterProps::new(elements.clone()),
        )
        .unwrap();
        prop_assert_eq!(list.string_list_value(), Value::Known(elements));
    }

    #[test]
    fn list_with_comma_rejected(
        head in "[a-z]{1,5}",
        tail in "[a-z]{1,5}",
        others in prop::collection::vec("[a-z]{1,5}", 0..4),
    ) {
        let mut stack = stack();
        let mut elements = others;
        elements.push(format!("{},{}", head, tail));
        let err = StringListParameter::new(&mut stack, "List", StringListParameterProps::new(elements))
            .unwrap_err();
        let is_separator_error =
            matches!(err, Error::Validation(ValidationError::ListSeparator { .. }));
        prop_assert!(is_separator_error);
    }

    #[test]
    fn digit_pattern_accepts_only_digits(value in "[a-z0-9]{1,10}") {
        let mut stack = stack();
        let result = StringParameter::new(
            &mut stack,
            "P",
            StringParameterProps::new(value.clone()).allowed_pattern(r"^\d+$"),
        );
        prop_assert_eq!(result.is_ok(), value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn dedup_returns_same_value_per_name(a in "/[a-z]{1,10}", b in "/[a-z]{1,10}") {
        let mut stack = stack();
        let first = value_for_string_parameter(&mut stack, a.clone(), None).unwrap();
        let again = value_for_string_parameter(&mut stack, a.clone(), None).unwrap();
        prop_assert_eq!(&first, &again);

        let other = value_for_string_parameter(&mut stack, b.clone(), None).unwrap();
        prop_assert_eq!(first == other, a == b);
    }

    #[test]
    fn declared_arn_embeds_name(name in "/[a-z]{1,10}(/[a-z]{1,10}){0,3}") {
        let mut stack = stack();
        let param = StringParameter::new(
            &mut stack,
            "P",
            StringParameterProps::new("v").name(name.clone()),
        )
        .unwrap();
        let arn = param.parameter_arn().known().unwrap();
        prop_assert!(arn.ends_with(&format!(":parameter{}", name)), "arn {} does not end with :parameter{}", arn, name);
    }
}

use alfresco_model::{Archive, JoinSiteRequest, ProcessDefinition, PropertyMap, PropertyModel};
use proptest::prelude::*;
use serde_json::{json, Value};

//
// ---------------- strategies ------------------------------------------------
//

fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9:_ -]{1,24}").expect("Invalid regex")
}

prop_compose! {
    fn process_definition_bags()(
        id in text(),
        category in proptest::option::of(text()),
        name in text(),
        start_form_key in proptest::option::of(text()),
        deployment_id in text(),
        graphic in any::<bool>(),
        key in text(),
        version in any::<i32>()
    ) -> PropertyMap {
        let mut props = PropertyMap::new()
            .with("id", id)
            .with("name", name)
            .with("deploymentId", deployment_id)
            .with("graphicNotationDefined", graphic)
            .with("key", key)
            .with("version", version);
        if let Some(category) = category {
            props.insert("category", category);
        }
        if let Some(start_form_key) = start_form_key {
            props.insert("startFormKey", start_form_key);
        }
        props
    }
}

prop_compose! {
    fn join_site_request_bags()(
        short_name in text(),
        identifier in proptest::option::of(text()),
        message in proptest::option::of(text())
    ) -> PropertyMap {
        let mut props = PropertyMap::new().with("shortName", short_name);
        if let Some(identifier) = identifier {
            props.insert("id", identifier);
        }
        if let Some(message) = message {
            props.insert("message", message);
        }
        props
    }
}

prop_compose! {
    fn join_site_requests()(
        short_name in text(),
        identifier in proptest::option::of(text()),
        message in proptest::option::of(text()),
        by_hand in any::<bool>()
    ) -> JoinSiteRequest {
        if by_hand {
            JoinSiteRequest::new(identifier.unwrap_or_default(), message.unwrap_or_default())
        } else {
            let mut props = PropertyMap::new().with("shortName", short_name);
            if let Some(identifier) = identifier {
                props.insert("id", identifier);
            }
            if let Some(message) = message {
                props.insert("message", message);
            }
            JoinSiteRequest::from_properties(&props)
        }
    }
}

//
// ---------------- properties ------------------------------------------------
//

proptest! {
    #[test]
    fn process_definition_field_fidelity(props in process_definition_bags()) {
        let def = ProcessDefinition::from_properties(&props);
        prop_assert_eq!(def.to_properties(), props);
    }

    #[test]
    fn join_site_request_field_fidelity(props in join_site_request_bags()) {
        let request = JoinSiteRequest::from_properties(&props);
        prop_assert_eq!(request.to_properties(), props);
    }

    #[test]
    fn process_definition_string_coercion(version in any::<i32>(), graphic in any::<bool>()) {
        let props = PropertyMap::new()
            .with("id", "wf")
            .with("version", version.to_string())
            .with("graphicNotationDefined", graphic.to_string());
        let def = ProcessDefinition::from_properties(&props);
        prop_assert_eq!(def.version(), version);
        prop_assert_eq!(def.graphic_notation_defined(), graphic);
    }

    #[test]
    fn process_definition_archive_round_trip(props in process_definition_bags()) {
        let def = ProcessDefinition::from_properties(&props);
        let decoded = ProcessDefinition::decode(&def.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, def);
    }

    #[test]
    fn join_site_request_archive_round_trip(request in join_site_requests()) {
        let decoded = JoinSiteRequest::decode(&request.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, request);
    }

    #[test]
    fn key_order_is_irrelevant(props in process_definition_bags()) {
        let forward: PropertyMap = props.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let entries: Vec<(String, Value)> =
            props.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let reversed: PropertyMap = entries.into_iter().rev().collect();

        prop_assert_eq!(
            ProcessDefinition::from_properties(&forward),
            ProcessDefinition::from_properties(&reversed)
        );
    }

    #[test]
    fn construction_never_panics(bag in proptest::collection::btree_map(
        prop_oneof![Just("id"), Just("version"), Just("shortName"), Just("graphicNotationDefined"), Just("message")],
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            any::<f64>().prop_map(|f| json!(f)),
            ".*".prop_map(Value::from),
            Just(json!([1, "two"])),
        ],
        0..5,
    )) {
        let props: PropertyMap = bag.into_iter().collect();
        let _ = ProcessDefinition::from_properties(&props);
        let _ = JoinSiteRequest::from_properties(&props);
    }
}

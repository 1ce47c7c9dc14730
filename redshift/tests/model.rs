/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use proptest::prelude::*;
use redshift::error::UnknownVariantError;
use redshift::input::{CreateClusterInput, DescribeTagsInput, ModifyClusterInput};
use redshift::model::{
    Cluster, Endpoint, Mode, NodeConfigurationOptionsFilter, NodeConfigurationOptionsFilterName,
    OperatorType, PendingModifiedValues, SortByOrder, Tag,
};
use redshift::Instant;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tag(key: &str, value: &str) -> Tag {
    Tag::builder().key(key).value(value).build()
}

#[test]
fn fields_default_to_absent() {
    let cluster = Cluster::builder().build();
    assert_eq!(cluster, Cluster::default());
    assert_eq!(cluster.cluster_identifier(), None);
    assert_eq!(cluster.number_of_nodes(), None);
    assert_eq!(cluster.encrypted(), None);
    assert_eq!(cluster.cluster_security_groups(), None);
    assert_eq!(cluster.cluster_create_time(), None);
    assert_eq!(cluster.endpoint(), None);

    let input = DescribeTagsInput::builder().build();
    assert_eq!(input.tag_keys(), None);
    assert_eq!(input.max_records(), None);
}

#[test]
fn builder_setters_round_trip() {
    let input = CreateClusterInput::builder()
        .cluster_identifier("examplecluster")
        .node_type("dc2.large")
        .master_username("adminuser")
        .master_user_password("TopSecret1")
        .number_of_nodes(2)
        .port(5439)
        .publicly_accessible(false)
        .cluster_security_groups("default")
        .cluster_security_groups("analysts")
        .tags(tag("env", "prod"))
        .build();

    assert_eq!(input.cluster_identifier(), Some("examplecluster"));
    assert_eq!(input.node_type(), Some("dc2.large"));
    assert_eq!(input.master_user_password(), Some("TopSecret1"));
    assert_eq!(input.number_of_nodes(), Some(2));
    assert_eq!(input.port(), Some(5439));
    assert_eq!(input.publicly_accessible(), Some(false));
    assert_eq!(
        input.cluster_security_groups(),
        Some(&["default".to_string(), "analysts".to_string()][..])
    );
    assert_eq!(input.tags(), Some(&[tag("env", "prod")][..]));
    assert_eq!(input.db_name(), None);
}

#[test]
fn set_none_clears_fields_and_lists() {
    let input = DescribeTagsInput::builder()
        .resource_type("cluster")
        .tag_keys("owner")
        .tag_keys("team")
        .set_tag_keys(None)
        .set_resource_type(None)
        .build();
    assert_eq!(input.tag_keys(), None);
    assert_eq!(input.resource_type(), None);
    assert_eq!(input, DescribeTagsInput::builder().build());
}

#[test]
fn explicit_empty_list_is_not_absent() {
    let empty = DescribeTagsInput::builder()
        .set_tag_values(Some(vec![]))
        .build();
    assert_eq!(empty.tag_values(), Some(&[][..]));
    assert_ne!(empty, DescribeTagsInput::builder().build());
}

#[test]
fn fluent_and_setter_paths_agree() {
    let fluent = ModifyClusterInput::builder()
        .cluster_identifier("examplecluster")
        .number_of_nodes(4)
        .vpc_security_group_ids("sg-1")
        .vpc_security_group_ids("sg-2")
        .encrypted(true)
        .build();
    let setters = ModifyClusterInput::builder()
        .set_cluster_identifier(Some("examplecluster".to_string()))
        .set_number_of_nodes(Some(4))
        .set_vpc_security_group_ids(Some(vec!["sg-1".to_string(), "sg-2".to_string()]))
        .set_encrypted(Some(true))
        .build();
    assert_eq!(fluent, setters);
}

#[test]
fn list_setter_takes_ownership_of_the_collection() {
    let mut groups = vec!["default".to_string()];
    let input = CreateClusterInput::builder()
        .set_cluster_security_groups(Some(groups.clone()))
        .build();
    groups.push("late-addition".to_string());
    assert_eq!(input.cluster_security_groups().map(|g| g.len()), Some(1));
}

#[test]
fn equality_is_field_wise() {
    let a = DescribeTagsInput::builder()
        .resource_name("arn:aws:redshift:us-east-1:123456789012:cluster:examplecluster")
        .max_records(50)
        .build();
    let b = a.clone();
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = DescribeTagsInput::builder()
        .resource_name("arn:aws:redshift:us-east-1:123456789012:cluster:examplecluster")
        .max_records(51)
        .build();
    assert_ne!(a, c);
}

#[test]
fn hash_is_consistent_with_equality_for_nested_shapes() {
    let build = || {
        CreateClusterInput::builder()
            .cluster_identifier("examplecluster")
            .tags(tag("env", "prod"))
            .tags(tag("team", "data"))
            .build()
    };
    assert_eq!(build(), build());
    assert_eq!(hash_of(&build()), hash_of(&build()));
}

#[test]
fn shapes_with_floating_point_fields_still_compare() {
    let a = Cluster::builder()
        .cluster_identifier("examplecluster")
        .endpoint(
            Endpoint::builder()
                .address("examplecluster.abc.us-east-1.redshift.amazonaws.com")
                .port(5439)
                .build(),
        )
        .cluster_create_time(Instant::from_epoch_seconds(1_546_300_800))
        .build();
    assert_eq!(a, a.clone());
    assert_ne!(
        a,
        Cluster::builder()
            .cluster_identifier("examplecluster")
            .build()
    );
}

#[test]
fn passwords_are_redacted_from_debug_output() {
    let input = CreateClusterInput::builder()
        .cluster_identifier("examplecluster")
        .master_user_password("TopSecret1")
        .build();
    let formatted = format!("{:?}", input);
    assert!(formatted.contains("examplecluster"), "{}", formatted);
    assert!(formatted.contains("*** Sensitive Data Redacted ***"));
    assert!(!formatted.contains("TopSecret1"));

    let builder = ModifyClusterInput::builder().master_user_password("TopSecret2");
    assert!(!format!("{:?}", builder).contains("TopSecret2"));

    let cluster = Cluster::builder()
        .pending_modified_values(
            PendingModifiedValues::builder()
                .master_user_password("TopSecret3")
                .build(),
        )
        .build();
    let formatted = format!("{:?}", cluster);
    assert!(formatted.contains("PendingModifiedValues"));
    assert!(!formatted.contains("TopSecret3"));
}

#[test]
fn filter_name_parses_known_values() {
    assert_eq!(
        NodeConfigurationOptionsFilterName::try_parse("NodeType"),
        Ok(NodeConfigurationOptionsFilterName::NodeType)
    );
    assert_eq!(
        NodeConfigurationOptionsFilterName::try_parse("EstimatedDiskUtilizationPercent"),
        Ok(NodeConfigurationOptionsFilterName::EstimatedDiskUtilizationPercent)
    );
    for value in NodeConfigurationOptionsFilterName::values() {
        let parsed = NodeConfigurationOptionsFilterName::try_parse(value).expect("known value");
        assert_eq!(parsed.as_str(), *value);
    }
}

#[test]
fn filter_name_rejects_unknown_and_empty_values() {
    let err: UnknownVariantError =
        NodeConfigurationOptionsFilterName::try_parse("bogus").unwrap_err();
    assert_eq!(err.value(), "bogus");
    assert_eq!(err.to_string(), "unknown enum variant: 'bogus'");
    assert!(NodeConfigurationOptionsFilterName::try_parse("").is_err());
    // matching is exact
    assert!(NodeConfigurationOptionsFilterName::try_parse("nodetype").is_err());
}

#[test]
fn lenient_conversion_keeps_unknown_values() {
    let mode = Mode::from("ultra-performance");
    assert_eq!(mode, Mode::Unknown("ultra-performance".to_string()));
    assert_eq!(mode.as_str(), "ultra-performance");
    assert_eq!("DESC".parse::<SortByOrder>(), Ok(SortByOrder::Descending));
    assert_eq!(OperatorType::from("between"), OperatorType::Between);
    assert_eq!(OperatorType::In.as_ref(), "in");
}

#[test]
fn enum_fields_in_builders() {
    let filter = NodeConfigurationOptionsFilter::builder()
        .name(NodeConfigurationOptionsFilterName::NumberOfNodes)
        .operator(OperatorType::Between)
        .values("2")
        .values("8")
        .build();
    assert_eq!(
        filter.name(),
        Some(&NodeConfigurationOptionsFilterName::NumberOfNodes)
    );
    assert_eq!(filter.operator(), Some(&OperatorType::Between));
    assert_eq!(filter.values().map(|v| v.len()), Some(2));
}

proptest! {
    #[test]
    fn try_parse_accepts_exactly_the_known_values(value in "\\PC*") {
        let parsed = NodeConfigurationOptionsFilterName::try_parse(&value);
        prop_assert_eq!(
            parsed.is_ok(),
            NodeConfigurationOptionsFilterName::values().contains(&value.as_str())
        );
    }

    #[test]
    fn lenient_conversion_round_trips(value in "\\PC*") {
        let parsed = Mode::from(value.as_str());
        prop_assert_eq!(parsed.as_str(), value.as_str());
    }
}

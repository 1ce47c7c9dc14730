/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use protocol_test_helpers::{
    assert_ok, forbid_form_params, require_form_params, validate_form_body, validate_form_params,
    validate_headers,
};
use redshift::error::{CreateClusterErrorKind, DescribeTagsErrorKind};
use redshift::model::{
    ActionType, Cluster, ClusterNode, ClusterSecurityGroupMembership, Mode,
    NodeConfigurationOption, NodeConfigurationOptionsFilter, NodeConfigurationOptionsFilterName,
    OperatorType, PendingModifiedValues, SnapshotAttributeToSortBy, SnapshotSortingEntity,
    SortByOrder, Tag, TaggedResource,
};
use redshift::operation::{
    CreateCluster, DescribeClusterSnapshots, DescribeNodeConfigurationOptions, DescribeTags,
    ModifyCluster, RestoreFromClusterSnapshot,
};
use redshift::{Config, Instant, Region};
use smithy_http::operation::BuildError;
use smithy_http::response::ParseStrictResponse;
use smithy_http::result::SdkError;

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn create_cluster_request() {
    let op = CreateCluster::builder()
        .cluster_identifier("examplecluster")
        .node_type("dc2.large")
        .master_username("adminuser")
        .master_user_password("TopSecret1")
        .number_of_nodes(2)
        .publicly_accessible(false)
        .cluster_security_groups("default")
        .tags(Tag::builder().key("env").value("prod").build())
        .set_iam_roles(Some(vec![]))
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request();
    assert_eq!(*request.method(), http::Method::POST);
    assert_eq!(request.uri(), "https://redshift.us-east-1.amazonaws.com/");
    assert_ok(validate_headers(
        request,
        &[("content-type", "application/x-www-form-urlencoded")],
    ));
    assert_ok(validate_form_body(
        request,
        "Action=CreateCluster\
        &Version=2012-12-01\
        &ClusterIdentifier=examplecluster\
        &NodeType=dc2.large\
        &MasterUsername=adminuser\
        &MasterUserPassword=TopSecret1\
        &ClusterSecurityGroups.ClusterSecurityGroupName.1=default\
        &NumberOfNodes=2\
        &PubliclyAccessible=false\
        &Tags.Tag.1.Key=env\
        &Tags.Tag.1.Value=prod\
        &IamRoles=",
    ));
    assert_ok(forbid_form_params(request, &["DBName", "Port", "Encrypted"]));

    let metadata = op.metadata().expect("metadata is set");
    assert_eq!(metadata.name(), "CreateCluster");
    assert_eq!(metadata.service(), "redshift");
}

#[test]
fn modify_cluster_request() {
    let op = ModifyCluster::builder()
        .cluster_identifier("examplecluster")
        .new_cluster_identifier("renamed")
        .vpc_security_group_ids("sg-1")
        .vpc_security_group_ids("sg-2")
        .allow_version_upgrade(true)
        .build()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_form_body(
        op.request(),
        "Action=ModifyCluster\
        &Version=2012-12-01\
        &ClusterIdentifier=examplecluster\
        &NewClusterIdentifier=renamed\
        &VpcSecurityGroupIds.VpcSecurityGroupId.1=sg-1\
        &VpcSecurityGroupIds.VpcSecurityGroupId.2=sg-2\
        &AllowVersionUpgrade=true",
    ));
}

#[test]
fn describe_tags_request_encodes_values() {
    let op = DescribeTags::builder()
        .resource_type("cluster")
        .tag_keys("owner")
        .tag_keys("cost center")
        .max_records(50)
        .build()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_form_params(
        op.request(),
        &[
            "Action=DescribeTags",
            "ResourceType=cluster",
            "TagKeys.TagKey.1=owner",
            "TagKeys.TagKey.2=cost%20center",
            "MaxRecords=50",
        ],
    ));
    assert_ok(require_form_params(op.request(), &["Version", "TagKeys.TagKey.2"]));
    assert_ok(forbid_form_params(op.request(), &["TagValues", "Marker"]));
}

#[test]
fn describe_cluster_snapshots_request() {
    let op = DescribeClusterSnapshots::builder()
        .cluster_identifier("examplecluster")
        .start_time(Instant::from_epoch_seconds(1_546_300_800))
        .cluster_exists(true)
        .sorting_entities(
            SnapshotSortingEntity::builder()
                .attribute(SnapshotAttributeToSortBy::CreateTime)
                .sort_order(SortByOrder::Descending)
                .build(),
        )
        .build()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_form_body(
        op.request(),
        "Action=DescribeClusterSnapshots\
        &Version=2012-12-01\
        &ClusterIdentifier=examplecluster\
        &StartTime=2019-01-01T00%3A00%3A00Z\
        &ClusterExists=true\
        &SortingEntities.SnapshotSortingEntity.1.Attribute=CREATE_TIME\
        &SortingEntities.SnapshotSortingEntity.1.SortOrder=DESC",
    ));
}

#[test]
fn describe_node_configuration_options_request() {
    let op = DescribeNodeConfigurationOptions::builder()
        .action_type(ActionType::RestoreCluster)
        .snapshot_identifier("snap-1")
        .filters(
            NodeConfigurationOptionsFilter::builder()
                .name(NodeConfigurationOptionsFilterName::NodeType)
                .operator(OperatorType::In)
                .values("dc2.large")
                .values("ra3.4xlarge")
                .build(),
        )
        .max_records(100)
        .build()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_form_body(
        op.request(),
        "Action=DescribeNodeConfigurationOptions\
        &Version=2012-12-01\
        &ActionType=restore-cluster\
        &SnapshotIdentifier=snap-1\
        &Filter.NodeConfigurationOptionsFilter.1.Name=NodeType\
        &Filter.NodeConfigurationOptionsFilter.1.Operator=in\
        &Filter.NodeConfigurationOptionsFilter.1.Value.item.1=dc2.large\
        &Filter.NodeConfigurationOptionsFilter.1.Value.item.2=ra3.4xlarge\
        &MaxRecords=100",
    ));
}

#[test]
fn restore_from_snapshot_request_uses_explicit_endpoint() {
    let config = Config::builder()
        .endpoint(http::Uri::from_static("http://localhost:4566/"))
        .build();
    let op = RestoreFromClusterSnapshot::builder()
        .cluster_identifier("restored")
        .snapshot_identifier("snap-1")
        .port(5440)
        .build()
        .make_operation(&config)
        .unwrap();
    assert_eq!(op.request().uri(), "http://localhost:4566/");
    assert_ok(validate_form_body(
        op.request(),
        "Action=RestoreFromClusterSnapshot\
        &Version=2012-12-01\
        &ClusterIdentifier=restored\
        &SnapshotIdentifier=snap-1\
        &Port=5440",
    ));
}

#[test]
fn operation_without_region_is_a_construction_failure() {
    let err = DescribeTags::builder()
        .build()
        .make_operation(&Config::builder().build())
        .expect_err("no region or endpoint");
    assert!(matches!(err, BuildError::MissingField { field: "region", .. }));
    let err: SdkError<redshift::error::DescribeTagsError> = err.into();
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
}

#[test]
fn parse_create_cluster_response() {
    let body = r#"<CreateClusterResponse xmlns="http://redshift.amazonaws.com/doc/2012-12-01/">
  <CreateClusterResult>
    <Cluster>
      <ClusterIdentifier>examplecluster</ClusterIdentifier>
      <NodeType>dc2.large</NodeType>
      <ClusterStatus>creating</ClusterStatus>
      <MasterUsername>adminuser</MasterUsername>
      <DBName>dev</DBName>
      <AutomatedSnapshotRetentionPeriod>1</AutomatedSnapshotRetentionPeriod>
      <ClusterSecurityGroups>
        <ClusterSecurityGroup>
          <ClusterSecurityGroupName>default</ClusterSecurityGroupName>
          <Status>active</Status>
        </ClusterSecurityGroup>
      </ClusterSecurityGroups>
      <VpcSecurityGroups/>
      <PendingModifiedValues>
        <MasterUserPassword>****</MasterUserPassword>
      </PendingModifiedValues>
      <ClusterVersion>1.0</ClusterVersion>
      <AllowVersionUpgrade>true</AllowVersionUpgrade>
      <NumberOfNodes>2</NumberOfNodes>
      <PubliclyAccessible>false</PubliclyAccessible>
      <Encrypted>false</Encrypted>
      <ClusterCreateTime>2019-01-01T00:00:00.500Z</ClusterCreateTime>
      <SomeFutureField><Nested>ignored</Nested></SomeFutureField>
      <Tags>
        <Tag>
          <Key>env</Key>
          <Value>prod &amp; test</Value>
        </Tag>
      </Tags>
      <ClusterNodes>
        <member>
          <NodeRole>LEADER</NodeRole>
          <PrivateIPAddress>10.0.0.1</PrivateIPAddress>
        </member>
      </ClusterNodes>
      <PendingActions>
        <member>resize</member>
      </PendingActions>
    </Cluster>
  </CreateClusterResult>
  <ResponseMetadata>
    <RequestId>f2a5b5a4-0000-11e9-9b1e-0123456789ab</RequestId>
  </ResponseMetadata>
</CreateClusterResponse>"#;
    let output = CreateCluster::new()
        .parse(&response(200, body))
        .expect("valid response");
    let expected = Cluster::builder()
        .cluster_identifier("examplecluster")
        .node_type("dc2.large")
        .cluster_status("creating")
        .master_username("adminuser")
        .db_name("dev")
        .automated_snapshot_retention_period(1)
        .cluster_security_groups(
            ClusterSecurityGroupMembership::builder()
                .cluster_security_group_name("default")
                .status("active")
                .build(),
        )
        .set_vpc_security_groups(Some(vec![]))
        .pending_modified_values(
            PendingModifiedValues::builder()
                .master_user_password("****")
                .build(),
        )
        .cluster_version("1.0")
        .allow_version_upgrade(true)
        .number_of_nodes(2)
        .publicly_accessible(false)
        .encrypted(false)
        .cluster_create_time(Instant::from_secs_and_nanos(1_546_300_800, 500_000_000))
        .tags(Tag::builder().key("env").value("prod & test").build())
        .cluster_nodes(
            ClusterNode::builder()
                .node_role("LEADER")
                .private_ip_address("10.0.0.1")
                .build(),
        )
        .pending_actions("resize")
        .build();
    assert_eq!(output.cluster(), Some(&expected));
}

#[test]
fn parse_describe_tags_response() {
    let body = r#"<DescribeTagsResponse xmlns="http://redshift.amazonaws.com/doc/2012-12-01/">
  <DescribeTagsResult>
    <TaggedResources>
      <TaggedResource>
        <Tag>
          <Key>env</Key>
          <Value>prod</Value>
        </Tag>
        <ResourceName>arn:aws:redshift:us-east-1:123456789012:cluster:examplecluster</ResourceName>
        <ResourceType>cluster</ResourceType>
      </TaggedResource>
    </TaggedResources>
    <Marker>next-page</Marker>
  </DescribeTagsResult>
  <ResponseMetadata>
    <RequestId>req-2</RequestId>
  </ResponseMetadata>
</DescribeTagsResponse>"#;
    let output = DescribeTags::new().parse(&response(200, body)).unwrap();
    assert_eq!(output.marker(), Some("next-page"));
    assert_eq!(
        output.tagged_resources(),
        Some(
            &[TaggedResource::builder()
                .tag(Tag::builder().key("env").value("prod").build())
                .resource_name("arn:aws:redshift:us-east-1:123456789012:cluster:examplecluster")
                .resource_type("cluster")
                .build()][..]
        )
    );
}

#[test]
fn parse_describe_cluster_snapshots_response() {
    let body = r#"<DescribeClusterSnapshotsResponse>
  <DescribeClusterSnapshotsResult>
    <Snapshots>
      <Snapshot>
        <SnapshotIdentifier>snap-1</SnapshotIdentifier>
        <ClusterIdentifier>examplecluster</ClusterIdentifier>
        <SnapshotCreateTime>2019-01-01T00:00:00Z</SnapshotCreateTime>
        <SnapshotType>manual</SnapshotType>
        <EncryptedWithHSM>false</EncryptedWithHSM>
        <TotalBackupSizeInMegaBytes>1024.5</TotalBackupSizeInMegaBytes>
        <ElapsedTimeInSeconds>42</ElapsedTimeInSeconds>
        <AccountsWithRestoreAccess>
          <AccountWithRestoreAccess>
            <AccountId>123456789012</AccountId>
          </AccountWithRestoreAccess>
        </AccountsWithRestoreAccess>
        <RestorableNodeTypes>
          <NodeType>dc2.large</NodeType>
          <NodeType>ra3.4xlarge</NodeType>
        </RestorableNodeTypes>
      </Snapshot>
    </Snapshots>
  </DescribeClusterSnapshotsResult>
</DescribeClusterSnapshotsResponse>"#;
    let output = DescribeClusterSnapshots::new()
        .parse(&response(200, body))
        .unwrap();
    assert_eq!(output.marker(), None);
    let snapshots = output.snapshots().expect("snapshots present");
    assert_eq!(snapshots.len(), 1);
    let snapshot = &snapshots[0];
    assert_eq!(snapshot.snapshot_identifier(), Some("snap-1"));
    assert_eq!(
        snapshot.snapshot_create_time(),
        Some(&Instant::from_epoch_seconds(1_546_300_800))
    );
    assert_eq!(snapshot.encrypted_with_hsm(), Some(false));
    assert_eq!(snapshot.total_backup_size_in_mega_bytes(), Some(1024.5));
    assert_eq!(snapshot.elapsed_time_in_seconds(), Some(42));
    assert_eq!(
        snapshot
            .accounts_with_restore_access()
            .and_then(|accounts| accounts[0].account_id()),
        Some("123456789012")
    );
    assert_eq!(
        snapshot.restorable_node_types(),
        Some(&["dc2.large".to_string(), "ra3.4xlarge".to_string()][..])
    );
}

#[test]
fn parse_node_configuration_options_keeps_unknown_modes() {
    let body = r#"<DescribeNodeConfigurationOptionsResponse>
  <DescribeNodeConfigurationOptionsResult>
    <NodeConfigurationOptionList>
      <NodeConfigurationOption>
        <NodeType>ra3.4xlarge</NodeType>
        <NumberOfNodes>2</NumberOfNodes>
        <EstimatedDiskUtilizationPercent>37.5</EstimatedDiskUtilizationPercent>
        <Mode>high-performance</Mode>
      </NodeConfigurationOption>
      <NodeConfigurationOption>
        <NodeType>dc2.large</NodeType>
        <Mode>ultra</Mode>
      </NodeConfigurationOption>
    </NodeConfigurationOptionList>
  </DescribeNodeConfigurationOptionsResult>
</DescribeNodeConfigurationOptionsResponse>"#;
    let output = DescribeNodeConfigurationOptions::new()
        .parse(&response(200, body))
        .unwrap();
    assert_eq!(
        output.node_configuration_option_list(),
        Some(
            &[
                NodeConfigurationOption::builder()
                    .node_type("ra3.4xlarge")
                    .number_of_nodes(2)
                    .estimated_disk_utilization_percent(37.5)
                    .mode(Mode::HighPerformance)
                    .build(),
                NodeConfigurationOption::builder()
                    .node_type("dc2.large")
                    .mode(Mode::Unknown("ultra".to_string()))
                    .build(),
            ][..]
        )
    );
}

#[test]
fn modeled_errors_are_classified() {
    let body = r#"<ErrorResponse xmlns="http://redshift.amazonaws.com/doc/2012-12-01/">
  <Error>
    <Type>Sender</Type>
    <Code>ClusterAlreadyExists</Code>
    <Message>Cluster already exists</Message>
  </Error>
  <RequestId>req-3</RequestId>
</ErrorResponse>"#;
    let op = CreateCluster::builder()
        .cluster_identifier("examplecluster")
        .build()
        .make_operation(&config())
        .unwrap();
    let err = match op.parse_response(response(400, body)) {
        Err(SdkError::ServiceError { err, raw }) => {
            assert_eq!(raw.status(), 400);
            err
        }
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is_cluster_already_exists_fault());
    assert!(matches!(
        err.kind,
        CreateClusterErrorKind::ClusterAlreadyExistsFault(_)
    ));
    assert_eq!(err.code(), Some("ClusterAlreadyExists"));
    assert_eq!(err.message(), Some("Cluster already exists"));
    assert_eq!(err.request_id(), Some("req-3"));
    assert_eq!(err.meta().extra("type"), Some("Sender"));
    assert_eq!(
        err.to_string(),
        "ClusterAlreadyExistsFault: Cluster already exists"
    );
}

#[test]
fn unknown_error_codes_are_unhandled() {
    let body = r#"<ErrorResponse>
  <Error>
    <Code>Throttling</Code>
    <Message>Rate exceeded</Message>
  </Error>
  <RequestId>req-4</RequestId>
</ErrorResponse>"#;
    let err = DescribeTags::new()
        .parse(&response(400, body))
        .expect_err("error status");
    assert!(matches!(err.kind, DescribeTagsErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("Throttling"));
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert!(!err.is_resource_not_found_fault());
}

#[test]
fn malformed_bodies_are_unhandled() {
    let err = DescribeTags::new()
        .parse(&response(503, "<html><body>Service Unavailable</body></html>"))
        .expect_err("error status");
    assert!(matches!(err.kind, DescribeTagsErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);

    let err = CreateCluster::new()
        .parse(&response(
            200,
            "<CreateClusterResponse><CreateClusterResult><Cluster>\
            <NumberOfNodes>two</NumberOfNodes>\
            </Cluster></CreateClusterResult></CreateClusterResponse>",
        ))
        .expect_err("unparsable integer");
    assert!(matches!(err.kind, CreateClusterErrorKind::Unhandled(_)));

    let err = CreateCluster::new()
        .parse(&response(200, "<SomethingElse/>"))
        .expect_err("wrong root");
    assert!(matches!(err.kind, CreateClusterErrorKind::Unhandled(_)));

    let err = CreateCluster::new()
        .parse(&response(
            200,
            "<CreateClusterResponse><CreateClusterResult><Cluster><ClusterIdentifier>abc",
        ))
        .expect_err("truncated body");
    assert!(matches!(err.kind, CreateClusterErrorKind::Unhandled(_)));

    let err = DescribeTags::new()
        .parse(&response(
            200,
            "<DescribeTagsResponse><DescribeTagsResult>\
            <Marker>m</Marker>\
            <TaggedResources><TaggedResource><ResourceType>cluster</ResourceType></TaggedResource></TaggedResources>\
            </DescribeTagsResult></DescribeTagsResponse> <<<garbage",
        ))
        .expect_err("trailing garbage");
    assert!(matches!(err.kind, DescribeTagsErrorKind::Unhandled(_)));

    let err = DescribeTags::new()
        .parse(&response(
            200,
            "<DescribeTagsResponse><DescribeTagsResult>\
            <Marker>m</Marker>\
            </Wrong></DescribeTagsResponse>",
        ))
        .expect_err("mismatched close tag");
    assert!(matches!(err.kind, DescribeTagsErrorKind::Unhandled(_)));

    let err = DescribeTags::new()
        .parse(&response(
            400,
            "<ErrorResponse><Error><Code>ClusterNotFound</Code><Message>gone",
        ))
        .expect_err("error status");
    assert!(matches!(err.kind, DescribeTagsErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
}

proptest! {
    #[test]
    fn response_parsing_never_panics(body in ".*", status in prop::sample::select(vec![200u16, 400, 500])) {
        let response = http::Response::builder()
            .status(status)
            .body(Bytes::from(body))
            .unwrap();
        let _ = CreateCluster::new().parse(&response);
        let _ = DescribeClusterSnapshots::new().parse(&response);
    }
}

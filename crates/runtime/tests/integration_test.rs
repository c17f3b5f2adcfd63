//! End-to-end tests for the definition runtime and registry, driven through
//! the in-memory host fixtures.

use std::sync::Arc;

use async_trait::async_trait;

use action_core::{
    ActionPath, ChangeCommand, ControlId, ControlMapEntry, ControlRef, ControlRole,
    EnablementError, EnablementResult, QuickActionNode, SectionInfo, StructuralContext,
    SubSectionInfo, TabBar, TabItem,
};
use action_runtime::{
    ActionDefinition, ActionEvent, ActionRegistry, ActionStrategy, DefinitionState,
    EnablementValidator, HostServices, PageView, RegistryConfig, Result, RuntimeError,
    StaticCapabilityProbe, StaticControlIndex, StaticDialogFactory, StaticLexicon, StaticPageView,
    ValidatorChain,
};

/// Minimal table-scoped strategy: one command per executed leaf, optional
/// shape-changing flag, rows-required node rule.
struct TableStrategy {
    force_refresh: bool,
}

impl TableStrategy {
    fn new() -> Self {
        Self {
            force_refresh: false,
        }
    }

    fn shape_changing() -> Self {
        Self {
            force_refresh: true,
        }
    }
}

#[async_trait]
impl ActionStrategy for TableStrategy {
    fn id(&self) -> &'static str {
        "test-table-action"
    }

    fn title_key(&self) -> &'static str {
        "TEST_TABLE_ACTION"
    }

    fn roles(&self) -> &[ControlRole] {
        &[ControlRole::Table]
    }

    fn force_refresh(&self) -> bool {
        self.force_refresh
    }

    fn refine_node(
        &self,
        node: &mut QuickActionNode,
        entry: &ControlMapEntry,
        view: &dyn PageView,
    ) {
        if entry.control.role == ControlRole::Table && view.row_count(&entry.control.id) == Some(0)
        {
            node.disable("table has no rows");
        }
    }

    async fn execute(
        &self,
        entry: &ControlMapEntry,
        _host: &HostServices,
    ) -> Result<Vec<ChangeCommand>> {
        Ok(vec![ChangeCommand::new(
            entry.control.id.clone(),
            "testChange",
            serde_json::json!({ "control": entry.control.id.as_str() }),
        )])
    }
}

struct FailingValidator(&'static str);

#[async_trait]
impl EnablementValidator for FailingValidator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn run(&self, _host: &HostServices) -> EnablementResult {
        Err(EnablementError::new(self.0))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn table(id: &str) -> ControlRef {
    ControlRef::new(id, ControlRole::Table)
}

fn host_with(index: StaticControlIndex, view: StaticPageView) -> (HostServices, Arc<StaticPageView>) {
    let view = Arc::new(view);
    let host = HostServices::new(
        Arc::new(index),
        view.clone(),
        Arc::new(StaticLexicon::new().with_text("TEST_TABLE_ACTION", "Test table action")),
        Arc::new(StaticDialogFactory::new()),
        Arc::new(StaticCapabilityProbe::new()),
    );
    (host, view)
}

/// Page with one tab bar (keys A/B) and one table per tab, no sections.
fn tab_page() -> (HostServices, Arc<StaticPageView>) {
    let bar = TabBar {
        id: ControlId::new("page--tabs"),
        items: vec![
            TabItem {
                key: "A".into(),
                label: "Open".into(),
            },
            TabItem {
                key: "B".into(),
                label: "Closed".into(),
            },
        ],
    };
    let index = StaticControlIndex::new(vec![table("page--table::A"), table("page--table::B")]);
    let view = StaticPageView::new()
        .with_tab_bar(bar)
        .with_row_count("page--table::A", 3)
        .with_row_count("page--table::B", 5);
    host_with(index, view)
}

/// Page with one section titled "Products" holding two subsections with one
/// table each.
fn section_page() -> (HostServices, Arc<StaticPageView>) {
    let section = SectionInfo {
        id: ControlId::new("page--products"),
        title: Some("Products".into()),
        subsections: 2,
    };
    let context = |sub: &str| {
        StructuralContext::in_section(
            section.clone(),
            SubSectionInfo {
                id: ControlId::new(sub),
                title: None,
            },
            None,
        )
    };
    let index = StaticControlIndex::new(vec![
        table("page--products--t1"),
        table("page--products--t2"),
    ]);
    let view = StaticPageView::new()
        .with_context("page--products--t1", context("page--products--sub1"))
        .with_context("page--products--t2", context("page--products--sub2"))
        .with_title("page--products--t1", "Items")
        .with_title("page--products--t2", "Schedules")
        .with_row_count("page--products--t1", 1)
        .with_row_count("page--products--t2", 0);
    host_with(index, view)
}

#[tokio::test]
async fn no_matching_controls_means_not_applicable() {
    let (host, _) = host_with(StaticControlIndex::default(), StaticPageView::new());
    let mut definition = ActionDefinition::new(TableStrategy::new(), ValidatorChain::empty(), host);

    definition.initialize().await.expect("initialize");

    assert_eq!(definition.state(), DefinitionState::Ready);
    assert!(!definition.is_applicable());
    assert!(definition.action_object().is_none());
}

#[tokio::test]
async fn served_tree_has_no_dangling_paths() {
    let (host, _) = section_page();
    let mut definition = ActionDefinition::new(TableStrategy::new(), ValidatorChain::empty(), host);

    definition.initialize().await.expect("initialize");
    let object = definition.action_object().expect("applicable");

    // Every DFS-reachable path must execute without a stale-path miss, which
    // is observable as a non-empty command list from the test strategy.
    let mut paths = Vec::new();
    fn collect(nodes: &[QuickActionNode], out: &mut Vec<ActionPath>) {
        for node in nodes {
            out.push(node.path.clone());
            collect(&node.children, out);
        }
    }
    collect(&object.children, &mut paths);
    assert_eq!(paths.len(), 3, "group node plus two leaves");

    for path in paths {
        let commands = definition.execute(path.as_str()).await.expect("execute");
        assert!(!commands.is_empty(), "path {path} did not resolve");
    }
}

#[tokio::test]
async fn reinitializing_an_unchanged_page_is_idempotent() {
    let (host, _) = section_page();
    let mut definition = ActionDefinition::new(TableStrategy::new(), ValidatorChain::empty(), host);

    definition.initialize().await.expect("first initialize");
    let first = definition.action_object().expect("applicable");
    definition.initialize().await.expect("second initialize");
    let second = definition.action_object().expect("applicable");

    assert_eq!(first, second);
}

#[tokio::test]
async fn first_objection_in_list_order_becomes_the_tooltip() {
    let (host, _) = tab_page();
    let chain = ValidatorChain::new(vec![
        Arc::new(FailingValidator("first objection")),
        Arc::new(FailingValidator("second objection")),
    ]);
    let mut definition = ActionDefinition::new(TableStrategy::new(), chain, host);

    definition.initialize().await.expect("initialize");
    let object = definition.action_object().expect("applicable");

    assert!(!object.enabled);
    assert_eq!(object.tooltip.as_deref(), Some("first objection"));
}

#[tokio::test]
async fn stale_paths_resolve_to_no_commands() {
    let (host, _) = tab_page();
    let mut definition = ActionDefinition::new(TableStrategy::new(), ValidatorChain::empty(), host);

    definition.initialize().await.expect("initialize");
    let commands = definition.execute("99/99").await.expect("execute");
    assert!(commands.is_empty());
}

#[tokio::test]
async fn malformed_paths_are_rejected_at_the_boundary() {
    let (host, _) = tab_page();
    let mut definition = ActionDefinition::new(TableStrategy::new(), ValidatorChain::empty(), host);

    definition.initialize().await.expect("initialize");
    let result = definition.execute("0/x").await;
    assert!(matches!(result, Err(RuntimeError::Path(_))));
}

#[tokio::test]
async fn tab_scoped_tables_execute_with_a_tab_switch() {
    let (host, view) = tab_page();
    let mut definition = ActionDefinition::new(TableStrategy::new(), ValidatorChain::empty(), host);

    definition.initialize().await.expect("initialize");
    let object = definition.action_object().expect("applicable");
    assert_eq!(object.children.len(), 2);

    let commands = definition.execute("1").await.expect("execute");
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].selector, ControlId::new("page--table::B"));

    assert_eq!(view.selections(), vec![ControlId::new("page--table::B")]);
    assert_eq!(
        view.tab_switches(),
        vec![(ControlId::new("page--tabs"), "B".to_string())]
    );
    assert_eq!(view.scrolls(), vec![ControlId::new("page--table::B")]);
}

#[tokio::test]
async fn per_node_rules_disable_individual_leaves() {
    let (host, _) = section_page();
    let mut definition = ActionDefinition::new(TableStrategy::new(), ValidatorChain::empty(), host);

    definition.initialize().await.expect("initialize");
    let object = definition.action_object().expect("applicable");

    // Action-level enablement is untouched by node rules
    assert!(object.enabled);

    let group = &object.children[0];
    assert_eq!(group.label, "'Products' section");
    let empty_table = &group.children[1];
    assert!(!empty_table.enabled);
    assert_eq!(empty_table.tooltip.as_deref(), Some("table has no rows"));
    let filled_table = &group.children[0];
    assert!(filled_table.enabled);
}

#[tokio::test]
async fn shape_changing_execution_invalidates_the_definition() {
    let (host, _) = tab_page();
    let mut definition =
        ActionDefinition::new(TableStrategy::shape_changing(), ValidatorChain::empty(), host);

    definition.initialize().await.expect("initialize");
    definition.execute("0").await.expect("execute");

    assert_eq!(definition.state(), DefinitionState::Invalidated);
    let result = definition.execute("1").await;
    assert!(matches!(result, Err(RuntimeError::NotReady { .. })));

    // Re-initializing recovers the instance
    definition.initialize().await.expect("re-initialize");
    assert_eq!(definition.state(), DefinitionState::Ready);
    assert_eq!(definition.execute("1").await.expect("execute").len(), 1);
}

#[tokio::test]
async fn registry_dispatches_and_publishes_lifecycle_events() {
    init_tracing();
    let (host, _) = tab_page();
    let mut registry = ActionRegistry::new(RegistryConfig::default());
    let mut events = registry.subscribe();

    registry.register(ActionDefinition::new(
        TableStrategy::shape_changing(),
        ValidatorChain::empty(),
        host,
    ));
    registry.initialize_all().await;

    assert_eq!(registry.action_objects().len(), 1);
    assert_eq!(
        events.recv().await.expect("event"),
        ActionEvent::Initialized {
            action_id: "test-table-action",
            applicable: true,
        }
    );

    let commands = registry
        .execute("test-table-action", "0")
        .await
        .expect("execute");
    assert_eq!(commands.len(), 1);

    assert_eq!(
        events.recv().await.expect("event"),
        ActionEvent::Executed {
            action_id: "test-table-action",
            path: "0".to_string(),
            commands: 1,
        }
    );
    assert_eq!(
        events.recv().await.expect("event"),
        ActionEvent::TreeInvalidated {
            action_id: "test-table-action",
        }
    );

    let unknown = registry.execute("no-such-action", "0").await;
    assert!(matches!(unknown, Err(RuntimeError::UnknownAction { .. })));
}

#[tokio::test]
async fn navigation_invalidates_every_definition() {
    let (host, _) = tab_page();
    let mut registry = ActionRegistry::default();
    registry.register(ActionDefinition::new(
        TableStrategy::new(),
        ValidatorChain::empty(),
        host,
    ));
    registry.initialize_all().await;

    registry.invalidate_all();
    let result = registry.execute("test-table-action", "0").await;
    assert!(matches!(result, Err(RuntimeError::NotReady { .. })));
    assert!(registry.action_objects().is_empty());
}

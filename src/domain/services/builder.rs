//! Tree builder
//!
//! Turns raw hierarchical data into a `TreeSnapshot`:
//!
//! 1. Reject a source that carries both declarative children and data.
//! 2. Build every level: strip transient fields, default an absent or empty
//!    label to the sibling's input position, apply menu defaults, recurse into children.
//! 3. Order each sibling list on its own when a sort directive is set.
//! 4. Assign identifiers and lineages top-down, after ordering.
//!
//! Index identifiers are positions in the ordered list, so re-sorting moves
//! them. Callers that need lineages to survive a re-sort should address by
//! an identifier field instead.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{
    extract_data, DeclarativeNode, Node, NodeDefaults, RawInput, RawNodeData, TreeSnapshot,
    TRANSIENT_FIELDS,
};
use crate::domain::value_objects::{
    AddressingScheme, BuildWarning, Identifier, Lineage, SortOrder,
};
use crate::error::{TreeMenuError, TreeMenuResult};

use super::identity::{build_lineage, identify};

/// Everything a build needs besides the data
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    pub addressing: AddressingScheme,
    pub sort: SortOrder,
    pub defaults: NodeDefaults,
}

impl BuildConfig {
    /// Address nodes by the named data field
    pub fn with_identifier(mut self, field: impl Into<String>) -> Self {
        self.addressing = AddressingScheme::Field(field.into());
        self
    }

    pub fn with_addressing(mut self, addressing: AddressingScheme) -> Self {
        self.addressing = addressing;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_defaults(mut self, defaults: NodeDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Where a tree's data comes from: raw data or declared nodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeSource {
    data: Option<RawInput>,
    declarative: Option<Vec<DeclarativeNode>>,
}

impl TreeSource {
    pub fn from_data(data: impl Into<RawInput>) -> Self {
        Self {
            data: Some(data.into()),
            declarative: None,
        }
    }

    pub fn from_children(children: Vec<DeclarativeNode>) -> Self {
        Self {
            data: None,
            declarative: Some(children),
        }
    }

    pub fn with_data(mut self, data: impl Into<RawInput>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_children(mut self, children: Vec<DeclarativeNode>) -> Self {
        self.declarative = Some(children);
        self
    }

    /// Normalize to root records; fails when both forms are present
    pub fn into_roots(self) -> TreeMenuResult<Vec<RawNodeData>> {
        match (self.data, self.declarative) {
            (Some(_), Some(_)) => Err(TreeMenuError::ConflictingInput),
            (Some(data), None) => Ok(data.into_roots()),
            (None, Some(children)) => Ok(extract_data(children)),
            (None, None) => Ok(Vec::new()),
        }
    }
}

/// Build a snapshot from a tree source
pub fn build(source: TreeSource, config: &BuildConfig) -> TreeMenuResult<TreeSnapshot> {
    let roots = source.into_roots()?;
    Ok(build_data(RawInput::Many(roots), config))
}

/// Build a snapshot from raw data
#[tracing::instrument(skip_all, fields(addressing = %config.addressing))]
pub fn build_data(input: impl Into<RawInput>, config: &BuildConfig) -> TreeSnapshot {
    let mut roots = build_level(input.into().into_roots(), config);

    let mut warnings = Vec::new();
    assign_identity(&mut roots, &Lineage::root(), &config.addressing, &mut warnings);

    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let snapshot = TreeSnapshot::new(roots, config.addressing.clone(), warnings);
    tracing::debug!(
        roots = snapshot.roots().len(),
        nodes = snapshot.len(),
        sorted = !config.sort.is_unsorted(),
        "built tree"
    );
    snapshot
}

fn build_level(data: Vec<RawNodeData>, config: &BuildConfig) -> Vec<Arc<Node>> {
    let mut nodes: Vec<Arc<Node>> = data
        .into_iter()
        .enumerate()
        .map(|(index, raw)| Arc::new(build_node(raw, index, config)))
        .collect();

    if !config.sort.is_unsorted() {
        nodes.sort_by(|a, b| config.sort.compare(a, b));
    }

    nodes
}

fn build_node(raw: RawNodeData, index: usize, config: &BuildConfig) -> Node {
    let RawNodeData {
        label,
        children,
        checked,
        selected,
        collapsed,
        collapsible,
        checkbox,
        expand_icon_class,
        collapse_icon_class,
        mut attributes,
    } = raw;

    attributes.retain(|key, _| !TRANSIENT_FIELDS.contains(&key.as_str()));

    let defaults = &config.defaults;
    let label = label
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| index.to_string());
    let mut node = Node::with_defaults(label, defaults);
    node.checked = checked.unwrap_or(defaults.checked);
    node.selected = selected.unwrap_or(defaults.selected);
    node.collapsed = collapsed.unwrap_or(defaults.collapsed);
    node.collapsible = collapsible.unwrap_or(defaults.collapsible);
    node.checkbox = checkbox.unwrap_or(defaults.checkbox);
    if let Some(class) = expand_icon_class {
        node.expand_icon_class = class;
    }
    if let Some(class) = collapse_icon_class {
        node.collapse_icon_class = class;
    }
    node.attributes = attributes;
    node.children = build_level(children, config);
    node
}

fn assign_identity(
    nodes: &mut [Arc<Node>],
    ancestor: &Lineage,
    scheme: &AddressingScheme,
    warnings: &mut Vec<BuildWarning>,
) {
    for (position, slot) in nodes.iter_mut().enumerate() {
        let node = Arc::make_mut(slot);
        let id = identify(scheme, &*node, position);
        let lineage = build_lineage(ancestor, id.clone());

        if let (Identifier::Missing, Some(field)) = (&id, scheme.field_name()) {
            warnings.push(BuildWarning::MissingIdentifier {
                lineage: lineage.clone(),
                field: field.to_string(),
            });
        }

        assign_identity(&mut node.children, &lineage, scheme, warnings);
        node.id = id;
        node.lineage = lineage;
    }

    if !scheme.is_index() {
        detect_duplicates(nodes, ancestor, warnings);
    }
}

fn detect_duplicates(nodes: &[Arc<Node>], parent: &Lineage, warnings: &mut Vec<BuildWarning>) {
    let mut counts: BTreeMap<&Identifier, usize> = BTreeMap::new();
    for node in nodes {
        if !node.id.is_missing() {
            *counts.entry(&node.id).or_default() += 1;
        }
    }

    for (identifier, count) in counts {
        if count > 1 {
            warnings.push(BuildWarning::DuplicateIdentifier {
                parent: parent.clone(),
                identifier: identifier.clone(),
                count,
            });
        }
    }
}

use doctree_dom::{Node, Property, Value};

/// Visitor pattern for traversing document trees immutably
///
/// This trait provides default implementations that walk the entire tree
/// in document order. Override specific visit_* methods to perform custom
/// actions on nodes.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn visit_property(&mut self, property: &Property) {
        walk_property(self, property);
    }
}

/// Mutable visitor pattern for transforming document trees
///
/// Similar to Visitor, but provides mutable access to nodes. Use this when
/// you need to modify the tree, or to stamp annotations during traversal.
pub trait VisitorMut: Sized {
    fn visit_node_mut(&mut self, node: &mut Node) {
        walk_node_mut(self, node);
    }

    fn visit_property_mut(&mut self, property: &mut Property) {
        walk_property_mut(self, property);
    }
}

// Default walk implementations for immutable visitor

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &Node) {
    match &node.value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            // Leaf node, no children to walk
        }
        Value::Array(items) => {
            for child in items {
                visitor.visit_node(child);
            }
        }
        Value::Object(properties) => {
            for property in properties {
                visitor.visit_property(property);
            }
        }
    }
}

pub fn walk_property<V: Visitor>(visitor: &mut V, property: &Property) {
    visitor.visit_node(&property.node);
}

// Default walk implementations for mutable visitor

pub fn walk_node_mut<V: VisitorMut>(visitor: &mut V, node: &mut Node) {
    match &mut node.value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            // Leaf node, no children to walk
        }
        Value::Array(items) => {
            for child in items {
                visitor.visit_node_mut(child);
            }
        }
        Value::Object(properties) => {
            for property in properties {
                visitor.visit_property_mut(property);
            }
        }
    }
}

pub fn walk_property_mut<V: VisitorMut>(visitor: &mut V, property: &mut Property) {
    visitor.visit_node_mut(&mut property.node);
}

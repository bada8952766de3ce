//! Node accessor capability and an owned binary tree node.
//!
//! The renderer never owns or mutates the tree. It only needs to read a
//! node's label and its two optional children, which is what
//! [`BinaryNode`] exposes. Existing tree types can implement it by hand or
//! with [`impl_binary_node!`](crate::impl_binary_node).

use alloc::boxed::Box;

/// Read access to a binary tree node.
///
/// # Examples
///
/// ```
/// use ascii_bintree::{BinaryNode, Plain, render};
///
/// struct Leafy {
///     name: &'static str,
///     kids: [Option<Box<Leafy>>; 2],
/// }
///
/// impl BinaryNode for Leafy {
///     type Label = str;
///
///     fn label(&self) -> &str {
///         self.name
///     }
///
///     fn left(&self) -> Option<&Self> {
///         self.kids[0].as_deref()
///     }
///
///     fn right(&self) -> Option<&Self> {
///         self.kids[1].as_deref()
///     }
/// }
///
/// let tree = Leafy { name: "root", kids: [None, None] };
/// assert_eq!(render(Some(&tree), &Plain).unwrap(), "(root)\n");
/// ```
pub trait BinaryNode {
    /// The value shown inside the brackets, fed to a [`LabelFormat`](crate::LabelFormat).
    type Label: ?Sized;

    fn label(&self) -> &Self::Label;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;
}

/// An owned binary tree node.
///
/// # Examples
///
/// ```
/// use ascii_bintree::{Node, Plain, render};
///
/// let tree = Node::new(5)
///     .with_left(Node::new(2))
///     .with_right(Node::new(10));
///
/// assert_eq!(render(Some(&tree), &Plain).unwrap(), " _(5)_\n |    |\n(2) (10)\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Create a leaf.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: Node<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: Node<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Replace the left subtree, returning the previous one.
    pub fn set_left(&mut self, left: Option<Node<T>>) -> Option<Node<T>> {
        core::mem::replace(&mut self.left, left.map(Box::new)).map(|old| *old)
    }

    /// Replace the right subtree, returning the previous one.
    pub fn set_right(&mut self, right: Option<Node<T>>) -> Option<Node<T>> {
        core::mem::replace(&mut self.right, right.map(Box::new)).map(|old| *old)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> BinaryNode for Node<T> {
    type Label = T;

    fn label(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Implement [`BinaryNode`] for a struct whose fields have arbitrary names.
///
/// The child fields must be `Option<P>` where `P` derefs to the node type
/// itself (`Box<Self>`, `Rc<Self>`, `&Self`, ...).
///
/// # Examples
///
/// ```
/// use ascii_bintree::{Plain, impl_binary_node, render};
///
/// struct BTNode {
///     data: char,
///     lchild: Option<Box<BTNode>>,
///     rchild: Option<Box<BTNode>>,
/// }
///
/// impl_binary_node!(BTNode, data: char, lchild, rchild);
///
/// let tree = BTNode {
///     data: 'a',
///     lchild: Some(Box::new(BTNode { data: 'b', lchild: None, rchild: None })),
///     rchild: None,
/// };
/// assert_eq!(render(Some(&tree), &Plain).unwrap(), " _(a)\n |\n(b)\n");
/// ```
#[macro_export]
macro_rules! impl_binary_node {
    ($node:ty, $label:ident : $label_ty:ty, $left:ident, $right:ident) => {
        impl $crate::BinaryNode for $node {
            type Label = $label_ty;

            fn label(&self) -> &Self::Label {
                &self.$label
            }

            fn left(&self) -> ::core::option::Option<&Self> {
                self.$left.as_deref()
            }

            fn right(&self) -> ::core::option::Option<&Self> {
                self.$right.as_deref()
            }
        }
    };
}

use gpui::{AnyElement, IntoElement};

/// Elements that take adornments before and after their main content.
pub trait PositionalParentElement: Sized {
    fn children_mut(&mut self) -> &mut PositionalChildren;

    fn child_left(mut self, child: impl IntoElement) -> Self {
        self.children_mut().left.push(child.into_any_element());
        self
    }

    fn child_right(mut self, child: impl IntoElement) -> Self {
        self.children_mut().right.push(child.into_any_element());
        self
    }
}

#[derive(Default)]
pub struct PositionalChildren {
    pub left: Vec<AnyElement>,
    pub right: Vec<AnyElement>,
}

impl PositionalChildren {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

use crate::ElementId;

/// Failures of structural tree mutations. Layout, dispatch and hit-testing
/// are total and never return these; only operations that rewire the tree
/// with caller-supplied handles can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("element {0:?} is no longer alive")]
    DeadElement(ElementId),

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: ElementId, child: ElementId },
}

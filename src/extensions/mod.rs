//! Optional overlay modules live here.
//!
//! Extensions draw into the document but never read chart data.

pub mod annotations;

pub use annotations::{
    Annotation, AnnotationConnector, AnnotationNote, AnnotationStyle, ConnectorEnd,
    ConnectorLineType, draw_annotations, wrap_label,
};

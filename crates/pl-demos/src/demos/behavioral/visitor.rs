//! Visitor: export operations added to shapes without touching them.

use std::time::Instant;

use serde::Serialize;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

const CONTROLS: &[Control] = &[
    Control::new("x", "XML Visitor"),
    Control::new("j", "JSON Visitor"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle { id: u32 },
    Square { id: u32 },
    Triangle { id: u32 },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "Circle",
            Shape::Square { .. } => "Square",
            Shape::Triangle { .. } => "Triangle",
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Shape::Circle { id } | Shape::Square { id } | Shape::Triangle { id } => *id,
        }
    }

    pub fn accept<V: ShapeVisitor>(&self, visitor: &mut V) {
        match self {
            Shape::Circle { .. } => visitor.visit_circle(self),
            Shape::Square { .. } => visitor.visit_square(self),
            Shape::Triangle { .. } => visitor.visit_triangle(self),
        }
    }
}

pub trait ShapeVisitor {
    fn visit_circle(&mut self, shape: &Shape);

    fn visit_square(&mut self, shape: &Shape);

    fn visit_triangle(&mut self, shape: &Shape);

    /// Consume the visitor and produce the export.
    fn finish(self) -> String;
}

#[derive(Debug, Default)]
pub struct XmlExportVisitor {
    lines: Vec<String>,
}

impl XmlExportVisitor {
    fn element(&mut self, shape: &Shape) {
        self.lines
            .push(format!("<{} id=\"{}\" />", shape.kind(), shape.id()));
    }
}

impl ShapeVisitor for XmlExportVisitor {
    fn visit_circle(&mut self, shape: &Shape) {
        self.element(shape);
    }

    fn visit_square(&mut self, shape: &Shape) {
        self.element(shape);
    }

    fn visit_triangle(&mut self, shape: &Shape) {
        self.element(shape);
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Default)]
pub struct JsonExportVisitor {
    shapes: Vec<Shape>,
}

impl ShapeVisitor for JsonExportVisitor {
    fn visit_circle(&mut self, shape: &Shape) {
        self.shapes.push(*shape);
    }

    fn visit_square(&mut self, shape: &Shape) {
        self.shapes.push(*shape);
    }

    fn visit_triangle(&mut self, shape: &Shape) {
        self.shapes.push(*shape);
    }

    fn finish(self) -> String {
        serde_json::to_string_pretty(&self.shapes)
            .unwrap_or_else(|err| format!("// export failed: {err}"))
    }
}

fn export<V: ShapeVisitor>(shapes: &[Shape], mut visitor: V) -> String {
    for shape in shapes {
        shape.accept(&mut visitor);
    }
    visitor.finish()
}

#[derive(Debug)]
pub struct VisitorDemo {
    shapes: Vec<Shape>,
    result: Option<String>,
}

impl Default for VisitorDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitorDemo {
    pub fn new() -> Self {
        Self {
            shapes: vec![
                Shape::Circle { id: 1 },
                Shape::Square { id: 2 },
                Shape::Triangle { id: 3 },
            ],
            result: None,
        }
    }

    pub fn export_xml(&mut self) {
        self.result = Some(export(&self.shapes, XmlExportVisitor::default()));
    }

    pub fn export_json(&mut self) {
        self.result = Some(export(&self.shapes, JsonExportVisitor::default()));
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

impl Demo for VisitorDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('x') => self.export_xml(),
            DemoInput::Key('j') => self.export_json(),
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Apply new operations (Export) to objects"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_export() {
        let mut demo = VisitorDemo::new();
        assert_eq!(demo.result(), None);
        demo.handle(DemoInput::Key('x'), Instant::now());
        assert_eq!(
            demo.result(),
            Some("<Circle id=\"1\" />\n<Square id=\"2\" />\n<Triangle id=\"3\" />")
        );
    }

    #[test]
    fn test_json_export_is_pretty_array() {
        let mut demo = VisitorDemo::new();
        demo.export_json();
        let text = demo.result().unwrap_or_default();
        assert!(text.starts_with("[\n  {"));

        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                { "type": "Circle", "id": 1 },
                { "type": "Square", "id": 2 },
                { "type": "Triangle", "id": 3 }
            ])
        );
    }
}

use crate::commands::{CmdMessage, CmdResult, ShapeReport};
use crate::error::{Result, SolidError};
use crate::shapes::{use_it, Rectangle, Square};

/// Runs the area check on a `width` x `height` rectangle and a square of
/// `side`, and reports which of them behaved like a rectangle.
pub fn run(width: u32, height: u32, side: u32) -> Result<CmdResult> {
    if width == 0 || height == 0 || side == 0 {
        return Err(SolidError::Api("Shape dimensions must be positive".into()));
    }

    let mut rectangle = Rectangle::new(width, height);
    let mut square = Square::new(side);

    let rectangle_report = ShapeReport {
        kind: "rectangle",
        shape: rectangle.to_string(),
        check: use_it(&mut rectangle),
    };
    let square_report = ShapeReport {
        kind: "square",
        shape: square.to_string(),
        check: use_it(&mut square),
    };

    let mut result = CmdResult::default();
    for report in [&rectangle_report, &square_report] {
        if !report.check.holds() {
            result.add_message(CmdMessage::warning(format!(
                "A {} cannot stand in for a rectangle: {}",
                report.kind, report.check
            )));
        }
    }

    Ok(result.with_shapes(vec![rectangle_report, square_report]))
}

//! Common test utilities for building workflows and controllers.
use flowstage::prelude::*;

/// Creates a workflow with `count` grid-packed stages and returns it together
/// with the stage ids in creation order.
#[allow(dead_code)]
pub fn workflow_with_stages(count: usize) -> (Workflow, Vec<String>) {
    let mut workflow = Workflow::new("Test workflow");
    let ids = (0..count).map(|_| workflow.add_stage()).collect();
    (workflow, ids)
}

/// Creates a controller editing a workflow with `count` stages.
#[allow(dead_code)]
pub fn controller_with_stages(count: usize) -> (EditorController, Vec<String>) {
    let (workflow, ids) = workflow_with_stages(count);
    (EditorController::new(workflow), ids)
}

/// Completes a right-anchor to left-anchor connection gesture and returns the
/// new connection's id.
#[allow(dead_code)]
pub fn connect_right_to_left(controller: &mut EditorController, from: &str, to: &str) -> String {
    controller
        .click_anchor(from, AnchorSide::Right)
        .expect("first anchor click should be accepted");
    controller
        .click_anchor(to, AnchorSide::Left)
        .expect("second anchor click should be accepted")
        .expect("gesture between two distinct blocks should create a connection")
}

//! Activity taxonomies of the OpenPack dataset.
//!
//! IDs, names and ignore flags are the label contract of the published
//! annotation files. Do not renumber or reorder entries.

use crate::activity::{ActClass, ActSet};
use std::sync::OnceLock;

static WORKPROCESS: OnceLock<ActSet> = OnceLock::new();
static OPERATIONS: OnceLock<ActSet> = OnceLock::new();
static ACTIONS: OnceLock<ActSet> = OnceLock::new();

fn build(classes: Vec<ActClass>) -> ActSet {
    ActSet::new(classes).unwrap_or_else(|e| panic!("invalid built-in taxonomy: {e}"))
}

/// Work-process level classes.
pub fn openpack_workprocess_classes() -> &'static ActSet {
    WORKPROCESS.get_or_init(|| {
        build(vec![
        ActClass::new(100, "Picking"),
        ActClass::new(200, "MoveItemLabel"),
        ActClass::new(300, "AssembleBox"),
        ActClass::new(400, "PackInBox"),
        ActClass::new(500, "CloseBox"),
        ActClass::new(600, "ReadLabel"),
        ActClass::new(700, "AttachLabel"),
        ActClass::new(800, "PutOnCartRack"),
        ActClass::new(900, "Pen"),
        ActClass::ignored(1000, "Null"),
        ])
    })
}

/// Operation level classes (annotation v3.2.2).
pub fn openpack_operations() -> &'static ActSet {
    OPERATIONS.get_or_init(|| {
        build(vec![
        ActClass::new(100, "Picking"),
        ActClass::new(200, "Relocate Item Label"),
        ActClass::new(300, "Assemble Box"),
        ActClass::new(400, "Insert Items"),
        ActClass::new(500, "Close Box"),
        ActClass::new(600, "Attach Box Label"),
        ActClass::new(700, "Scan Label"),
        ActClass::new(800, "Attach Shipping Label"),
        ActClass::new(900, "Put on Back Table"),
        ActClass::new(1000, "Fill out Order"),
        ActClass::ignored(8100, "Null"),
        ])
    })
}

/// Fine-grained action classes (annotation v3.2.2).
pub fn openpack_actions() -> &'static ActSet {
    ACTIONS.get_or_init(|| {
        build(vec![
        ActClass::new(101, "Pick Up Sheet"),
        ActClass::new(103, "Pick Up Item from Box"),
        ActClass::new(104, "Pick Up Order Sheet & Walk to Rack - v2"),
        ActClass::new(105, "Walk to Work Bench - v2"),
        ActClass::new(106, "Pick Up Order Sheet & Walk to Rack with Prev Packed Box - v2"),
        ActClass::new(107, "Pick Up Box Sheet"),
        ActClass::new(108, "Walk to Work Bench"),
        ActClass::new(201, "Remove Item Label"),
        ActClass::new(202, "Attach to Order Sheet"),
        ActClass::new(203, "Hold Pen"),
        ActClass::new(204, "Write Check Mark"),
        ActClass::new(205, "Put Item Small Bag"),
        ActClass::new(206, "Relocate Item Label - v2"),
        ActClass::new(207, "Write - v2"),
        ActClass::new(301, "Pick Cardboard"),
        ActClass::new(302, "Bend Flap"),
        ActClass::new(303, "Attach Tape"),
        ActClass::new(304, "Turn Over Box"),
        ActClass::new(305, "Pick Up Assembled Box"),
        ActClass::new(306, "Assemble Box - v2"),
        ActClass::new(401, "Insert Item into Box"),
        ActClass::new(402, "Air Cushion"),
        ActClass::new(403, "Separate Air Cushion"),
        ActClass::new(404, "Put Item Small Bag"),
        ActClass::new(405, "Insert Items - v2"),
        ActClass::new(501, "Bend Flap"),
        ActClass::new(502, "Attach Tape"),
        ActClass::new(503, "Close Box - v2"),
        ActClass::new(601, "Attach Box Label"),
        ActClass::new(602, "Attach Box Label - v2"),
        ActClass::new(701, "Pick Up HT"),
        ActClass::new(702, "Scan Order Sheet"),
        ActClass::new(703, "Scan Box"),
        ActClass::new(704, "Scan Item"),
        ActClass::new(705, "Hold Scanner"),
        ActClass::new(706, "Scan Order Sheet"),
        ActClass::new(707, "Scan Printer"),
        ActClass::new(708, "HT - v2"),
        ActClass::new(709, "Printer - v2"),
        ActClass::new(801, "Pick Up Shipping Label"),
        ActClass::new(802, "Attach Shipping Label"),
        ActClass::new(803, "Attach Shipping Label - v2"),
        ActClass::new(901, "Pick Up Packed Box"),
        ActClass::new(902, "Put Packed Box"),
        ActClass::new(903, "Put on Back Table - v2"),
        ActClass::new(1001, "Pick Up Pen"),
        ActClass::new(1002, "Write Sign"),
        ActClass::new(1003, "Push Order Sheet into Tray"),
        ActClass::new(1004, "Fill out - v2"),
        ActClass::new(1005, "Write - v2"),
        ActClass::new(1006, "Insert - v2"),
        ActClass::ignored(8101, "Others"),
        ActClass::ignored(8102, "System Error"),
        ActClass::ignored(8103, "Ignore"),
        ActClass::ignored(8104, "Unknown"),
        ActClass::ignored(8201, "System Error"),
        ])
    })
}

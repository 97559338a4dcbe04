//! Scenario tests spanning the tree, widgets and the frame driver

mod editing;

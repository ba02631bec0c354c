//! Windowed viewer using winit for the window and pixels for the framebuffer.

mod run_gui;

pub use run_gui::RunGuiCommand;

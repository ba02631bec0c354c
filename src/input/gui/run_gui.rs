use std::error::Error;
use std::time::Instant;

use log::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::{Window, WindowBuilder},
};

use crate::controllers::frame_scheduler::{FrameAction, FrameScheduler};
use crate::controllers::snowflake::SnowflakeController;
use crate::core::snowflake::snowflake_config::SnowflakeConfig;
use crate::presenters::pixels::PixelsSurface;

const WINDOW_TITLE: &str = "Snowflake";

pub struct RunGuiCommand {
    config: SnowflakeConfig,
}

impl RunGuiCommand {
    pub fn new(config: SnowflakeConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::new().build()?;
        let display_size = self.config.display_size;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(display_size, display_size))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let surface = PixelsSurface::new(window, display_size)?;
        let mut controller = SnowflakeController::new(self.config.clone(), surface)?;
        let mut scheduler = FrameScheduler::new(
            self.config.frame_delay,
            self.config.final_hold,
            Instant::now(),
        );
        let mut failure: Option<Box<dyn Error>> = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Window closed");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                if let Err(err) = controller.surface_mut().resize(size.width, size.height) {
                    error!("{}", err);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if let Err(err) = controller.surface().redraw() {
                    error!("{}", err);
                }
            }
            Event::AboutToWait => match scheduler.poll(Instant::now()) {
                FrameAction::Wait(deadline) => {
                    elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
                }
                FrameAction::Step => match controller.step() {
                    Ok(shown) => {
                        scheduler.record_step(Instant::now(), shown.is_some());
                        elwt.set_control_flow(ControlFlow::WaitUntil(scheduler.deadline()));
                    }
                    Err(err) => {
                        failure = Some(err.into());
                        elwt.exit();
                    }
                },
                FrameAction::Exit => elwt.exit(),
            },
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

use life_canvas::{
    Frame, Renderer, SimulationConfig, SimulationState,
    constants::{FRAME_HEIGHT, FRAME_WIDTH, WINDOW_TITLE},
    input,
};
use std::{sync::Arc, time::Instant};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(FRAME_WIDTH, FRAME_HEIGHT))
            .build(&event_loop)?,
    );
    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

    let config = SimulationConfig::from_env();
    log::info!(
        "Starting at {} gen/s, fill probability {}",
        config.generations_per_second,
        config.fill_probability
    );
    let mut simulation = SimulationState::new(config);
    let mut frame = Frame::new();
    let mut cursor: Option<PhysicalPosition<f64>> = None;

    event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| match event {
        Event::AboutToWait => {
            simulation.tick(Instant::now());
            if simulation.take_redraw() {
                window.request_redraw();
            }
            elwt.set_control_flow(match simulation.next_deadline() {
                Some(deadline) => ControlFlow::WaitUntil(deadline),
                None => ControlFlow::Wait,
            });
        }
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(physical_size) => {
                renderer.resize(physical_size);
                window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                renderer.resize(window.inner_size());
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => cursor = Some(position),
            WindowEvent::CursorLeft { .. } => cursor = None,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(position) = cursor {
                    simulation.click(position, renderer.size());
                }
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state == ElementState::Pressed && !key_event.repeat {
                    match key_event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                        PhysicalKey::Code(key) => {
                            if let Some(command) = input::command_for_key(key) {
                                log::debug!("{command:?}");
                                simulation.apply(command, Instant::now());
                            }
                        }
                        PhysicalKey::Unidentified(_) => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                frame.render(simulation.grid());
                match renderer.present(&frame) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure();
                        window.request_redraw();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("WGPU Error: OutOfMemory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("WGPU Error: {e:?}"),
                }
                window.set_title(&format!("{WINDOW_TITLE} - {}", simulation.status_line()));
            }
            _ => {}
        },
        _ => {}
    })?;
    Ok(())
}

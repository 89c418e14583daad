mod config;
mod context;
mod renderer;

use config::WindowConfig;
use context::GlContext;
use renderer::Renderer;

use glutin::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};

/// Field order matters: the GL objects must be deleted while the context
/// is still alive and current.
struct App {
    renderer: Renderer,
    context: GlContext,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new();
    let context = GlContext::new(WindowConfig::default(), &event_loop)?;
    let renderer = Renderer::new();
    let app = App { renderer, context };

    log::info!("entering render loop");
    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                ..
            } => *control_flow = ControlFlow::Exit,
            WindowEvent::Resized(size) => {
                app.context.resize(size);
                app.renderer.set_viewport(size.width as i32, size.height as i32);
            }
            _ => {}
        },
        Event::MainEventsCleared => app.context.window().request_redraw(),
        Event::RedrawRequested(_) => {
            app.renderer.draw_frame();
            if let Err(err) = app.context.swap_buffers() {
                log::warn!("buffer swap failed: {}", err);
            }
        }
        Event::LoopDestroyed => log::info!("window closed, releasing GL resources"),
        _ => {}
    });
}

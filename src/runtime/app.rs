//! ApplicationHandler and window management

use std::rc::Rc;

use anyhow::{Context as _, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window, WindowId};

use sidebar_layout::cli::StartupConfig;
use sidebar_layout::commands::Cmd;
use sidebar_layout::messages::{AppMsg, Msg, NavigationMsg, PointerEvent, UiMsg};
use sidebar_layout::model::AppModel;
use sidebar_layout::update::update;
use sidebar_layout::view::hit_test::HitTarget;

use super::input::handle_key;
use super::renderer::Renderer;

const INITIAL_WINDOW_SIZE: (u32, u32) = (1280, 800);

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    cursor_icon: CursorIcon,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let model = AppModel::new(
            INITIAL_WINDOW_SIZE.0,
            INITIAL_WINDOW_SIZE.1,
            startup.layout,
            startup.outline,
            startup.location,
        );

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            cursor_icon: CursorIcon::Default,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Sidebar Layout")
            .with_inner_size(LogicalSize::new(
                INITIAL_WINDOW_SIZE.0,
                INITIAL_WINDOW_SIZE.1,
            ));

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let logical = window.inner_size().to_logical::<u32>(window.scale_factor());
        update(
            &mut self.model,
            Msg::App(AppMsg::Resize(logical.width, logical.height)),
        );

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn scale_factor(&self) -> f64 {
        self.renderer.as_ref().map_or(1.0, Renderer::scale_factor)
    }

    /// Pick the cursor for the current hover target and drag state
    fn update_cursor_icon(&mut self) {
        let Some(window) = &self.window else { return };

        let icon = if self.model.sidebar.is_resizing() {
            CursorIcon::EwResize
        } else {
            match self.model.ui.hover {
                Some(HitTarget::FoldButton) => CursorIcon::Pointer,
                Some(HitTarget::ResizeHandle) => CursorIcon::EwResize,
                _ => CursorIcon::Default,
            }
        };

        if icon != self.cursor_icon {
            window.set_cursor(icon);
            self.cursor_icon = icon;
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("{:#}", e);
                    }
                }
                let logical = size.to_logical::<u32>(self.scale_factor());
                update(
                    &mut self.model,
                    Msg::App(AppMsg::Resize(logical.width, logical.height)),
                )
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.set_scale_factor(*scale_factor);
                }
                Some(Cmd::Redraw)
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    handle_key(&mut self.model, &event.logical_key, self.modifiers)
                } else {
                    None
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(&self.model) {
                        tracing::error!("Render error: {:#}", e);
                    }
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.scale_factor());
                let cmd = update(
                    &mut self.model,
                    Msg::Pointer(PointerEvent::Moved {
                        x: logical.x,
                        y: logical.y,
                    }),
                );
                self.update_cursor_icon();
                cmd
            }
            WindowEvent::CursorLeft { .. } => {
                let cmd = update(&mut self.model, Msg::Ui(UiMsg::PointerLeft));
                self.update_cursor_icon();
                cmd
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let cmd = match state {
                    ElementState::Pressed => {
                        let (x, y) = self.model.ui.pointer_position?;
                        update(&mut self.model, Msg::Ui(UiMsg::PointerPressed { x, y }))
                    }
                    ElementState::Released => {
                        update(&mut self.model, Msg::Pointer(PointerEvent::Released))
                    }
                };
                self.update_cursor_icon();
                cmd
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => {
                        -*lines * self.model.config.scroll_line_height
                    }
                    MouseScrollDelta::PixelDelta(pos) => {
                        -(pos.to_logical::<f64>(self.scale_factor()).y as f32)
                    }
                };
                update(&mut self.model, Msg::Navigation(NavigationMsg::ScrollMain(dy)))
            }
            _ => None,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, event_loop: &ActiveEventLoop) {
        if cmd.is_quit() {
            event_loop.exit();
            return;
        }
        if cmd.needs_redraw() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else { return };
        if window_id != window.id() {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            self.process_cmd(cmd, event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Nothing animates; sleep until the next input event
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Tear down the sidebar controller's pointer subscription
        self.model.sidebar.dispose();
        tracing::debug!(
            listeners = self.model.pointer_events.listener_count(),
            "shutting down"
        );
    }
}

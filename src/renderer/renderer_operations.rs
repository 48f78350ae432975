//! Renderer operations
//!
//! GPU setup, mesh upload, per-frame submission, and the sandbox event
//! loop. The world is generated eagerly at startup on the render thread;
//! after that the loop only polls input, advances the camera, and draws.

use super::mesh;
use super::mesh_utils::create_axis_meshes;
use super::renderer_data::{LightUniform, RendererData};
use super::texture_atlas::create_atlas_texture;
use super::vertex::{DebugVertex, Vertex};
use crate::camera::{
    apply_transform_batch, build_camera_uniform, init_camera, update_aspect_ratio, CameraData,
    CameraTransformBatch, CameraUniform,
};
use crate::constants::core::CHUNK_SIZE;
use crate::constants::render::FRAME_TIME_MS;
use crate::error::{EngineError, EngineResult};
use crate::input::{
    movement_axes, process_key_event, process_mouse_delta, take_look_delta, InputState,
};
use crate::meshing::{mesh_chunk, AtlasTile, GeometryPool, MeshData};
use crate::utils::fps::FpsCounter;
use crate::world::{OpenSimplexNoise, TerrainGenerator};
use crate::EngineConfig;

use anyhow::Result;
use cgmath::Point3;
use glam::Vec3;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wgpu::util::DeviceExt;
use winit::event::{DeviceEvent, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowBuilder};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Build all GPU resources for the window.
pub async fn init_renderer(
    window: Arc<Window>,
    config: &EngineConfig,
) -> EngineResult<RendererData> {
    let size = window.inner_size();

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let surface = instance.create_surface(window)?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(EngineError::AdapterNotFound)?;

    log::info!(
        "[Renderer::init] Using adapter: {}",
        adapter.get_info().name
    );

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("embervox-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        )
        .await?;

    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .copied()
        .find(|format| format.is_srgb())
        .unwrap_or(surface_caps.formats[0]);

    let surface_config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode: surface_caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &surface_config);

    let depth_view = create_depth_view(&device, &surface_config);

    // -- Uniform buffers --
    let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("camera-uniform"),
        size: std::mem::size_of::<CameraUniform>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("light-uniform"),
        contents: bytemuck::bytes_of(&LightUniform::default()),
        usage: wgpu::BufferUsages::UNIFORM,
    });

    // -- Bind group layouts --
    let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("uniform-bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });

    let atlas_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("atlas-bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("uniform-bind-group"),
        layout: &uniform_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: light_buffer.as_entire_binding(),
            },
        ],
    });

    let (atlas_view, atlas_sampler) = create_atlas_texture(&device, &queue, config.seed);
    let atlas_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("atlas-bind-group"),
        layout: &atlas_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&atlas_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&atlas_sampler),
            },
        ],
    });

    // -- Pipelines --
    let terrain_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("terrain-shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/terrain.wgsl").into()),
    });
    let axes_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("axes-shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/axes.wgsl").into()),
    });

    let terrain_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("terrain-pipeline-layout"),
        bind_group_layouts: &[&uniform_bgl, &atlas_bgl],
        push_constant_ranges: &[],
    });
    let axes_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("axes-pipeline-layout"),
        bind_group_layouts: &[&uniform_bgl],
        push_constant_ranges: &[],
    });

    // The quad templates carry mixed winding by contract, so the terrain
    // pass cannot cull back faces; depth testing resolves visibility.
    let terrain_pipeline =
        create_pipeline(&device, &terrain_layout, &terrain_shader, surface_format, Vertex::desc(), "terrain-pipeline");
    let axes_pipeline =
        create_pipeline(&device, &axes_layout, &axes_shader, surface_format, DebugVertex::desc(), "axes-pipeline");

    log::info!("[Renderer::init] Renderer initialized");

    Ok(RendererData {
        surface,
        device,
        queue,
        surface_config,
        depth_view,
        terrain_pipeline,
        axes_pipeline,
        camera_buffer,
        uniform_bind_group,
        atlas_bind_group,
        chunk_meshes: Vec::new(),
        axis_meshes: Vec::new(),
    })
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
    vertex_layout: wgpu::VertexBufferLayout<'_>,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: "vs_main",
            buffers: &[vertex_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

fn create_depth_view(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth-texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

// ============================================================================
// RESIZE & UPLOAD
// ============================================================================

/// Reconfigure the surface and depth buffer for a new window size.
pub fn resize(renderer: &mut RendererData, width: u32, height: u32) {
    if width == 0 || height == 0 {
        return;
    }
    renderer.surface_config.width = width;
    renderer.surface_config.height = height;
    renderer
        .surface
        .configure(&renderer.device, &renderer.surface_config);
    renderer.depth_view = create_depth_view(&renderer.device, &renderer.surface_config);
}

/// Upload one chunk's exported mesh. Empty meshes are skipped.
pub fn upload_world_mesh(renderer: &mut RendererData, mesh_data: &MeshData) {
    if mesh_data.is_empty() {
        return;
    }
    let uploaded = mesh::upload_chunk_mesh(&renderer.device, mesh_data);
    renderer.chunk_meshes.push(uploaded);
}

/// Upload the three world-axis boxes.
pub fn upload_axis_overlay(renderer: &mut RendererData) {
    for (vertices, indices) in create_axis_meshes() {
        let uploaded = mesh::upload_debug_mesh(&renderer.device, &vertices, &indices);
        renderer.axis_meshes.push(uploaded);
    }
}

// ============================================================================
// FRAME SUBMISSION
// ============================================================================

/// Render one frame: write the camera uniform, then draw axes and terrain
/// into a single depth-tested pass.
pub fn render_frame(
    renderer: &mut RendererData,
    camera: &CameraData,
) -> Result<(), wgpu::SurfaceError> {
    let frame = renderer.surface.get_current_texture()?;
    let view = frame
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let camera_uniform = build_camera_uniform(camera);
    renderer.queue.write_buffer(
        &renderer.camera_buffer,
        0,
        bytemuck::bytes_of(&camera_uniform),
    );

    let mut encoder = renderer
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame-encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("main-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &renderer.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.axes_pipeline);
        pass.set_bind_group(0, &renderer.uniform_bind_group, &[]);
        for axis in &renderer.axis_meshes {
            pass.set_vertex_buffer(0, axis.vertex_buffer.slice(..));
            pass.set_index_buffer(axis.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..axis.index_count, 0, 0..1);
        }

        pass.set_pipeline(&renderer.terrain_pipeline);
        pass.set_bind_group(0, &renderer.uniform_bind_group, &[]);
        pass.set_bind_group(1, &renderer.atlas_bind_group, &[]);
        for chunk in &renderer.chunk_meshes {
            pass.set_vertex_buffer(0, chunk.vertex_buffer.slice(..));
            pass.set_index_buffer(chunk.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..chunk.index_count, 0, 0..1);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    frame.present();

    Ok(())
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the sandbox: build the window and renderer, generate and upload the
/// startup world, then drive input, camera, and frame submission until the
/// window closes.
pub fn run(event_loop: EventLoop<()>, config: EngineConfig) -> Result<()> {
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .build(&event_loop)?,
    );

    // Relative mouse look wants a locked cursor; fall back to confined where
    // the platform refuses locking.
    if let Err(error) = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
    {
        log::warn!("[Renderer::run] Cursor grab unavailable: {}", error);
    }
    window.set_cursor_visible(false);

    let mut renderer = pollster::block_on(init_renderer(window.clone(), &config))?;

    build_startup_world(&mut renderer, &config);
    upload_axis_overlay(&mut renderer);

    let size = window.inner_size();
    let mut camera = init_camera(
        Point3::new(24.0, 24.0, -20.0),
        std::f32::consts::FRAC_PI_2,
        -0.4,
    );
    camera = update_aspect_ratio(&camera, size.width, size.height);

    let mut input = InputState::default();
    let mut fps = FpsCounter::new();
    let mut last_frame = Instant::now();
    let frame_time = Duration::from_millis(FRAME_TIME_MS);

    log::info!("[Renderer::run] Entering event loop");

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent {
                window_id,
                event: window_event,
            } if window_id == window.id() => match window_event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(new_size) => {
                    resize(&mut renderer, new_size.width, new_size.height);
                    camera = update_aspect_ratio(&camera, new_size.width, new_size.height);
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if matches!(
                        key_event.physical_key,
                        PhysicalKey::Code(KeyCode::Escape)
                    ) {
                        elwt.exit();
                        return;
                    }
                    process_key_event(&mut input, &key_event);
                }
                WindowEvent::RedrawRequested => {
                    let elapsed = last_frame.elapsed();
                    if elapsed < frame_time {
                        return;
                    }
                    last_frame = Instant::now();

                    camera = advance_camera(&camera, &mut input, elapsed.as_secs_f32());

                    if let Some(frames) = fps.frame() {
                        log::info!("[Renderer::run] FPS: {}", frames);
                    }

                    match render_frame(&mut renderer, &camera) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let width = renderer.surface_config.width;
                            let height = renderer.surface_config.height;
                            resize(&mut renderer, width, height);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("[Renderer::run] Out of GPU memory, exiting");
                            elwt.exit();
                        }
                        Err(error) => {
                            log::warn!("[Renderer::run] Frame error: {}", error);
                        }
                    }
                }
                _ => {}
            },
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                process_mouse_delta(&mut input, delta.0, delta.1);
            }
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        }
    })?;

    Ok(())
}

/// Generate, mesh, and upload the startup grid of chunks through one shared
/// geometry pool.
fn build_startup_world(renderer: &mut RendererData, config: &EngineConfig) {
    let start = Instant::now();

    let noise = OpenSimplexNoise::new(config.seed);
    let generator =
        TerrainGenerator::with_params(noise, config.octaves, config.frequency, config.amplitude);

    let mut pool = GeometryPool::new();
    let tile = AtlasTile::default();

    for chunk_x in 0..config.view_chunks {
        for chunk_z in 0..config.view_chunks {
            let origin = Vec3::new(
                (chunk_x * CHUNK_SIZE) as f32,
                0.0,
                (chunk_z * CHUNK_SIZE) as f32,
            );

            let chunk = generator.generate(origin);
            mesh_chunk(&chunk, &mut pool, tile);
            let mesh_data = pool.to_mesh_data();
            upload_world_mesh(renderer, &mesh_data);
            pool.reset();
        }
    }

    log::info!(
        "[Renderer::run] Built {} chunk meshes in {:.1?}",
        renderer.chunk_meshes.len(),
        start.elapsed()
    );
}

/// Fold the current input state into one frame's camera update.
fn advance_camera(camera: &CameraData, input: &mut InputState, delta_time: f32) -> CameraData {
    let (forward, right, up) = movement_axes(input);
    let (look_x, look_y) = take_look_delta(input);

    let batch = CameraTransformBatch {
        forward_delta: forward * camera.movement_speed,
        right_delta: right * camera.movement_speed,
        up_delta: up * camera.movement_speed,
        yaw_delta: look_x * camera.rotation_sensitivity,
        pitch_delta: -look_y * camera.rotation_sensitivity,
    };

    apply_transform_batch(camera, &batch, delta_time)
}

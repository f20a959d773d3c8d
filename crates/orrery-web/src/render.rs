//! Slim WebGPU renderer: the points of interest and an asteroid scatter as
//! camera-facing billboards, enough to fly the scene. Textures, rings and
//! post effects belong to a richer scene layer and are not this crate's
//! concern.

use glam::{Mat4, Vec3};
use orrery_core::Pose;
use web_sys as web;
use wgpu::util::DeviceExt;

use crate::constants::{
    ASTEROID_COUNT, CAMERA_FAR, CAMERA_FOV_RADIANS, CAMERA_NEAR, HERO_MOON_CENTER, OUTPOST_CENTER,
    PORTFOLIO_CENTER, VANTAGE_CENTER,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    pos: [f32; 3],
    scale: f32,
    color: [f32; 4],
}

/// Deterministic [0, 1) hash; the scatter must not change between loads.
fn hash01(mut x: u32) -> f32 {
    x = x.wrapping_mul(0x9E37_79B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x45D9_F3B3);
    x ^= x >> 16;
    (x & 0x00FF_FFFF) as f32 / 16_777_216.0
}

fn scene_instances() -> Vec<InstanceData> {
    let mut out = Vec::with_capacity(4 + ASTEROID_COUNT);
    let planets: [(Vec3, f32, [f32; 4]); 4] = [
        (HERO_MOON_CENTER, 2.5, [0.93, 0.93, 0.93, 1.0]),
        (PORTFOLIO_CENTER, 3.5, [0.87, 0.87, 0.87, 1.0]),
        (VANTAGE_CENTER, 16.0, [0.91, 0.78, 0.55, 1.0]),
        (OUTPOST_CENTER, 5.5, [0.76, 0.55, 0.42, 1.0]),
    ];
    for (center, radius, color) in planets {
        out.push(InstanceData {
            pos: center.to_array(),
            scale: radius * 2.0,
            color,
        });
    }
    for i in 0..ASTEROID_COUNT as u32 {
        let x = (hash01(i * 3 + 1) - 0.5) * 800.0;
        let y = (hash01(i * 3 + 2) - 0.5) * 400.0;
        let z = (hash01(i * 3 + 3) - 0.5) * 800.0;
        let scale = hash01(i * 7 + 5) * 0.8 + 0.1;
        out.push(InstanceData {
            pos: [x, y, z],
            scale,
            color: [0.55, 0.58, 0.62, 0.3],
        });
    }
    out
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_count: u32,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
    camera: Pose,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader_src = r#"
struct Uniforms {
  view_proj: mat4x4<f32>,
  cam_right: vec4<f32>,
  cam_up: vec4<f32>,
};
@group(0) @binding(0) var<uniform> u: Uniforms;

struct VsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) color: vec4<f32>,
  @location(1) local: vec2<f32>,
};

@vertex
fn vs_main(
  @location(0) v_pos: vec2<f32>,
  @location(1) i_pos: vec3<f32>,
  @location(2) i_scale: f32,
  @location(3) i_color: vec4<f32>,
) -> VsOut {
  let world = i_pos
    + u.cam_right.xyz * (v_pos.x * i_scale)
    + u.cam_up.xyz * (v_pos.y * i_scale);
  var out: VsOut;
  out.pos = u.view_proj * vec4<f32>(world, 1.0);
  out.color = i_color;
  out.local = v_pos;
  return out;
}

@fragment
fn fs_main(inf: VsOut) -> @location(0) vec4<f32> {
  // Circular mask within the quad, soft-edged toward radius 0.5.
  let r = length(inf.local);
  let shape_alpha = 1.0 - smoothstep(0.42, 0.5, r);
  // Cheap limb shading so the discs read as spheres.
  let shade = 1.0 - 0.55 * smoothstep(0.0, 0.5, r);
  return vec4<f32>(inf.color.rgb * shade, shape_alpha * inf.color.a);
}
"#;
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("billboards"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertex buffer (two triangles)
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        // Static scene: planets plus asteroid scatter, uploaded once.
        let instances = scene_instances();
        let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("instance_vb"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            instance_count: instances.len() as u32,
            bind_group,
            width,
            height,
            camera: Pose::new(Vec3::new(0.0, 0.0, 15.0), Vec3::ZERO),
        })
    }

    /// Latest smoothed pose from the rig; applied on the next render.
    pub fn set_camera(&mut self, pose: Pose) {
        self.camera = pose;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn uniforms(&self) -> Uniforms {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOV_RADIANS, aspect, CAMERA_NEAR, CAMERA_FAR);
        let view = Mat4::look_at_rh(self.camera.position, self.camera.look_at, Vec3::Y);
        let forward = (self.camera.look_at - self.camera.position).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        Uniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            cam_right: [right.x, right.y, right.z, 0.0],
            cam_up: [up.x, up.y, up.z, 0.0],
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        let u = self.uniforms();
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rpass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.012,
                        g: 0.012,
                        b: 0.02,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..6, 0..self.instance_count);
        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

use crate::mesh::PlaneMesh;

/// GPU copies of one plane mesh. Recreated whenever the mesh generation
/// changes; attributes are re-uploaded only when the CPU side is dirty.
pub struct MeshBuffers {
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,

    index_count: u32,
    generation: u64,
}

impl MeshBuffers {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, mesh: &mut PlaneMesh) -> Self {
        let position_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Plane Position Buffer"),
            size: std::mem::size_of_val(mesh.positions.as_slice()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let color_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Plane Color Buffer"),
            size: std::mem::size_of_val(mesh.colors.as_slice()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Plane Index Buffer"),
            size: std::mem::size_of_val(mesh.indices.as_slice()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(&mesh.indices));

        let mut buffers = Self {
            position_buffer,
            color_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            generation: mesh.generation,
        };
        mesh.positions_dirty = true;
        mesh.colors_dirty = true;
        buffers.upload_dirty(queue, mesh);
        buffers
    }

    /// Brings the GPU copy in line with `mesh`, replacing the buffers
    /// outright after a rebuild.
    pub fn sync(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, mesh: &mut PlaneMesh) {
        if mesh.generation != self.generation {
            tracing::debug!(
                "Mesh generation {} -> {}, reallocating GPU buffers",
                self.generation,
                mesh.generation
            );
            self.destroy();
            *self = Self::new(device, queue, mesh);
            return;
        }
        self.upload_dirty(queue, mesh);
    }

    fn upload_dirty(&mut self, queue: &wgpu::Queue, mesh: &mut PlaneMesh) {
        if mesh.take_positions_dirty() {
            queue.write_buffer(&self.position_buffer, 0, bytemuck::cast_slice(&mesh.positions));
        }
        if mesh.take_colors_dirty() {
            queue.write_buffer(&self.color_buffer, 0, bytemuck::cast_slice(&mesh.colors));
        }
    }

    fn destroy(&self) {
        self.position_buffer.destroy();
        self.color_buffer.destroy();
        self.index_buffer.destroy();
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.position_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.color_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    }
}

pub fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        }],
    }
}

// UV-sphere mesh generation for the globe surface.

/// Interleaved vertex: position, normal, uv.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct GlobeMesh {
    pub vertices: Vec<GlobeVertex>,
    pub indices: Vec<u32>,
}

/// Build a latitude/longitude sphere. `sectors` is the slice count around
/// the equator, `stacks` the count from pole to pole; both must be >= 3.
/// Vertices are shared along stack rows, so the grid has
/// `(sectors + 1) * (stacks + 1)` vertices and `sectors * stacks * 6`
/// indices minus the degenerate pole triangles.
pub fn mesh(sectors: u32, stacks: u32, radius: f32) -> GlobeMesh {
    let mut out = GlobeMesh::default();
    for i in 0..=stacks {
        // phi sweeps from +pi/2 (north pole) down to -pi/2
        let v = i as f32 / stacks as f32;
        let phi = std::f32::consts::FRAC_PI_2 - v * std::f32::consts::PI;
        let (sp, cp) = phi.sin_cos();
        for j in 0..=sectors {
            let u = j as f32 / sectors as f32;
            let theta = u * std::f32::consts::TAU;
            let (st, ct) = theta.sin_cos();
            let n = [cp * ct, sp, cp * st];
            out.vertices.push(GlobeVertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
                uv: [u, v],
            });
        }
    }
    let row = sectors + 1;
    for i in 0..stacks {
        for j in 0..sectors {
            let k0 = i * row + j;
            let k1 = k0 + row;
            if i != 0 {
                out.indices.extend_from_slice(&[k0, k1, k0 + 1]);
            }
            if i != stacks - 1 {
                out.indices.extend_from_slice(&[k0 + 1, k1, k1 + 1]);
            }
        }
    }
    out
}

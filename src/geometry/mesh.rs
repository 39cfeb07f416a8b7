/// 网格数据结构模块
///
/// - `MeshData`：CPU 侧的结构化网格数据（位置、法线、三角形面）
/// - `Mesh`：持有当前加载结果，并以扁平切片的形式暴露给渲染器

use std::mem::size_of_val;
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::geometry::loaders::{has_supported_extension, MeshLoader, ObjLoader};
use crate::math::geometry::assign_face_normals;

/// CPU侧网格数据
///
/// `positions` 和 `normals` 长度相同且一一对应；
/// `faces` 中的索引是 0-based，不做范围校验。
///
/// # 示例
///
/// ```rust
/// use mesh_buffers::geometry::MeshData;
///
/// let mesh = MeshData::from_geometry(
///     vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     vec![[0, 1, 2]],
/// );
///
/// assert_eq!(mesh.normals[0], [0.0, 0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// 顶点位置，按文件中出现的顺序
    pub positions: Vec<[f32; 3]>,

    /// 顶点法线
    ///
    /// 每个顶点取最后一个引用它的面的法线；没有被任何面引用的顶点为零向量。
    pub normals: Vec<[f32; 3]>,

    /// 三角形面（每个面 3 个 16 位索引）
    pub faces: Vec<[u16; 3]>,
}

impl MeshData {
    /// 创建一个空的网格数据
    pub fn new() -> Self {
        Self::default()
    }

    /// 由位置和面构建网格数据，并推导顶点法线
    pub fn from_geometry(positions: Vec<[f32; 3]>, faces: Vec<[u16; 3]>) -> Self {
        let normals = assign_face_normals(&positions, &faces);

        Self {
            positions,
            normals,
            faces,
        }
    }

    /// 获取顶点数量
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// 获取三角形数量
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// 获取索引数量（三角形数 × 3）
    #[inline]
    pub fn index_count(&self) -> usize {
        self.faces.len() * 3
    }
}

/// `Mesh` 的加载状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshState {
    /// 尚未成功加载过任何文件
    Empty,
    /// 缓冲区已填充
    Loaded,
}

/// 可直接上传到 GPU 的网格
///
/// 持有最近一次成功加载的数据，并以紧密排列的切片暴露：
///
/// - 顶点缓冲区：每个顶点 3 个 `f32`
/// - 法线缓冲区：每个顶点 3 个 `f32`
/// - 索引缓冲区：每个三角形 3 个 `u16`
///
/// 返回的切片借用自 `Mesh`，因此在切片存活期间无法调用 [`Mesh::load`]。
/// 已复制出去的数据可通过 [`Mesh::generation`] 判断是否过期：每次成功加载都会使其加一。
///
/// # 示例
///
/// ```rust,no_run
/// use mesh_buffers::geometry::Mesh;
///
/// let mesh = Mesh::from_obj_file("assets/cube.obj")?;
///
/// let vertices: &[f32] = mesh.vertex_buffer();
/// let indices: &[u16] = mesh.index_buffer();
/// assert_eq!(vertices.len(), mesh.num_vertices() * 3);
/// assert_eq!(indices.len(), mesh.num_indices());
/// # Ok::<(), mesh_buffers::core::MeshBuffersError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    data: MeshData,
    generation: u64,
    source: Option<PathBuf>,
}

impl Mesh {
    /// 创建一个空网格（`MeshState::Empty`）
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建网格并立即从 OBJ 文件加载
    pub fn from_obj_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut mesh = Self::new();
        mesh.load(path)?;
        Ok(mesh)
    }

    /// 从 OBJ 文件加载，整体替换当前内容
    ///
    /// 文件无法打开时返回错误，当前内容保持不变。
    /// 格式错误的行不会导致失败；扩展名不是 `.obj` 时只记录警告，仍按 OBJ 解析。
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !has_supported_extension::<ObjLoader>(path) {
            crate::loader_warn!(path = %path.display(), "文件扩展名不是 .obj，仍按 OBJ 格式解析");
        }
        let data = ObjLoader::load_from_file(path)?;
        self.replace(data, Some(path.to_path_buf()));
        Ok(())
    }

    /// 从内存中的 OBJ 文本加载，整体替换当前内容
    pub fn load_from_memory(&mut self, bytes: &[u8]) -> Result<()> {
        let data = ObjLoader::load_from_memory(bytes)?;
        self.replace(data, None);
        Ok(())
    }

    fn replace(&mut self, data: MeshData, source: Option<PathBuf>) {
        self.data = data;
        self.source = source;
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            vertices = self.data.vertex_count(),
            indices = self.data.index_count(),
            "网格缓冲区已更新"
        );
    }

    /// 当前状态
    pub fn state(&self) -> MeshState {
        if self.generation == 0 {
            MeshState::Empty
        } else {
            MeshState::Loaded
        }
    }

    /// 成功加载的次数，每次加载后之前取得的缓冲区数据都应视为过期
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 当前内容来自的文件路径（从内存加载或尚未加载时为 `None`）
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 结构化的网格数据
    #[inline]
    pub fn mesh_data(&self) -> &MeshData {
        &self.data
    }

    /// 顶点缓冲区：`[x0, y0, z0, x1, y1, z1, ...]`
    #[inline]
    pub fn vertex_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.data.positions)
    }

    /// 法线缓冲区：与顶点缓冲区一一对应
    #[inline]
    pub fn normal_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.data.normals)
    }

    /// 索引缓冲区：每 3 个索引一个三角形
    #[inline]
    pub fn index_buffer(&self) -> &[u16] {
        bytemuck::cast_slice(&self.data.faces)
    }

    /// 顶点缓冲区的原始字节，用于上传到 GPU
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data.positions)
    }

    /// 法线缓冲区的原始字节
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data.normals)
    }

    /// 索引缓冲区的原始字节
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data.faces)
    }

    /// 顶点缓冲区字节数
    pub fn num_vertex_bytes(&self) -> usize {
        size_of_val(self.vertex_buffer())
    }

    /// 法线缓冲区字节数
    pub fn num_normal_bytes(&self) -> usize {
        size_of_val(self.normal_buffer())
    }

    /// 索引缓冲区字节数
    pub fn num_index_bytes(&self) -> usize {
        size_of_val(self.index_buffer())
    }

    /// 顶点数量（每个顶点 3 个浮点数）
    pub fn num_vertices(&self) -> usize {
        self.vertex_buffer().len() / 3
    }

    /// 法线数量（每个法线 3 个浮点数）
    pub fn num_normals(&self) -> usize {
        self.normal_buffer().len() / 3
    }

    /// 索引数量（三角形数 × 3）
    pub fn num_indices(&self) -> usize {
        self.index_buffer().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &[u8] = b"v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nf 1 2 3\n";

    #[test]
    fn test_mesh_data_creation() {
        let mesh = MeshData::new();

        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.index_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_data_counts() {
        let mesh = MeshData::from_geometry(
            vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            vec![[0, 1, 2], [0, 2, 3]],
        );

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.normals.len(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.index_count(), 6);
    }

    #[test]
    fn test_new_mesh_is_empty() {
        let mesh = Mesh::new();

        assert_eq!(mesh.state(), MeshState::Empty);
        assert_eq!(mesh.generation(), 0);
        assert!(mesh.vertex_buffer().is_empty());
        assert!(mesh.normal_buffer().is_empty());
        assert!(mesh.index_buffer().is_empty());
        assert_eq!(mesh.num_vertex_bytes(), 0);
        assert!(mesh.source_path().is_none());
    }

    #[test]
    fn test_flat_buffers() {
        let mut mesh = Mesh::new();
        mesh.load_from_memory(TRIANGLE).unwrap();

        assert_eq!(mesh.state(), MeshState::Loaded);
        assert_eq!(
            mesh.vertex_buffer(),
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(
            mesh.normal_buffer(),
            &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(mesh.index_buffer(), &[0, 1, 2]);
    }

    #[test]
    fn test_byte_sizes_and_counts() {
        let mut mesh = Mesh::new();
        mesh.load_from_memory(TRIANGLE).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_normals(), 3);
        assert_eq!(mesh.num_indices(), 3);
        assert_eq!(mesh.num_vertex_bytes(), 3 * 3 * 4);
        assert_eq!(mesh.num_normal_bytes(), 3 * 3 * 4);
        assert_eq!(mesh.num_index_bytes(), 3 * 2);

        assert_eq!(mesh.vertex_bytes().len(), mesh.num_vertex_bytes());
        assert_eq!(mesh.normal_bytes().len(), mesh.num_normal_bytes());
        assert_eq!(mesh.index_bytes().len(), mesh.num_index_bytes());
    }

    #[test]
    fn test_index_bytes_are_native_u16() {
        let mut mesh = Mesh::new();
        mesh.load_from_memory(b"f 2 3 258\n").unwrap();

        let expected: Vec<u8> = [1u16, 2, 257]
            .iter()
            .flat_map(|i| i.to_ne_bytes())
            .collect();
        assert_eq!(mesh.index_bytes(), expected.as_slice());
    }

    #[test]
    fn test_reload_replaces_everything() {
        let mut mesh = Mesh::new();
        mesh.load_from_memory(b"v 1 1 1\nv 2 2 2\nv 3 3 3\nv 4 4 4\nf 1 2 4\nf 2 3 4\n")
            .unwrap();
        mesh.load_from_memory(TRIANGLE).unwrap();

        let mut fresh = Mesh::new();
        fresh.load_from_memory(TRIANGLE).unwrap();

        assert_eq!(mesh.mesh_data(), fresh.mesh_data());
        assert_eq!(mesh.vertex_bytes(), fresh.vertex_bytes());
        assert_eq!(mesh.normal_bytes(), fresh.normal_bytes());
        assert_eq!(mesh.index_bytes(), fresh.index_bytes());
        assert_eq!(mesh.generation(), 2);
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut mesh = Mesh::new();
        mesh.load_from_memory(TRIANGLE).unwrap();
        let before = mesh.mesh_data().clone();

        let err = mesh.load("no/such/dir/missing.obj").unwrap_err();

        assert!(err.to_string().contains("missing.obj"));
        assert_eq!(mesh.mesh_data(), &before);
        assert_eq!(mesh.generation(), 1);
        assert_eq!(mesh.state(), MeshState::Loaded);
    }

    #[test]
    fn test_empty_document_is_loaded_but_empty() {
        let mut mesh = Mesh::new();
        mesh.load_from_memory(b"").unwrap();

        assert_eq!(mesh.state(), MeshState::Loaded);
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_indices(), 0);
    }
}

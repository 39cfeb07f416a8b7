/// 几何体加载模块
///
/// # 模块结构
///
/// - `mesh`: CPU 侧网格数据 `MeshData` 和持有扁平缓冲区的 `Mesh`
/// - `loaders`: OBJ 加载器
///
/// # 架构设计
///
/// ```text
/// 文件 (OBJ)
///     ↓
/// ObjLoader（解析 + 法线推导）
///     ↓
/// MeshData (CPU侧数据)
///     ↓
/// Mesh（扁平缓冲区视图，上传到 GPU）
/// ```
///
/// # 使用示例
///
/// ```rust,no_run
/// use mesh_buffers::geometry::Mesh;
///
/// let mut mesh = Mesh::new();
/// mesh.load("model.obj")?;
///
/// println!("顶点数: {}", mesh.num_vertices());
/// println!("索引数: {}", mesh.num_indices());
/// # Ok::<(), mesh_buffers::core::MeshBuffersError>(())
/// ```

pub mod mesh;
pub mod loaders;

// 重新导出常用类型
pub use mesh::{Mesh, MeshData, MeshState};

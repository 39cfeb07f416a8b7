/// 模型加载器模块
///
/// 提供统一的模型加载接口和 OBJ 格式的具体实现。
///
/// # 使用示例
///
/// ```rust,no_run
/// use mesh_buffers::geometry::loaders::{MeshLoader, ObjLoader};
/// use std::path::Path;
///
/// let mesh = ObjLoader::load_from_file(Path::new("model.obj"))?;
/// # Ok::<(), mesh_buffers::core::MeshBuffersError>(())
/// ```
use crate::core::error::Result;
use crate::geometry::mesh::MeshData;
use std::path::Path;

pub mod obj_loader;

// 重新导出加载器
pub use obj_loader::ObjLoader;

/// 网格加载器 trait
///
/// 加载器是无状态的（使用关联函数），只返回 CPU 侧的 `MeshData`。
pub trait MeshLoader {
    /// 从文件路径加载网格
    ///
    /// # 错误
    ///
    /// 文件无法打开时返回 `MeshLoadError::OpenFailed`，错误信息包含路径。
    fn load_from_file(path: &Path) -> Result<MeshData>;

    /// 从内存数据加载网格
    fn load_from_memory(data: &[u8]) -> Result<MeshData>;

    /// 获取支持的文件扩展名列表（小写，不含点号）
    fn supported_extensions() -> &'static [&'static str];
}

/// 路径的扩展名（不区分大小写）是否在加载器 `L` 的支持列表中
///
/// 只用于提示：加载器按内容解析，不会因为扩展名拒绝文件。
pub fn has_supported_extension<L: MeshLoader>(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .map_or(false, |ext| L::supported_extensions().contains(&ext.as_str()))
}

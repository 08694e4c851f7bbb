mod camera;
mod lights;
mod meshes;
mod phong;

pub use camera::CameraScene;
pub use lights::MultiLightScene;
pub use meshes::MeshesScene;
pub use phong::PhongScene;

//! One emitter per generated artifact.

mod dockerfile;
mod dockerignore;
mod faasgen_toml;
mod handler_js;
mod index_js;
mod package_json;
mod root_package_json;
mod template_yml;

pub use dockerfile::Dockerfile;
pub use dockerignore::DockerIgnore;
pub use faasgen_toml::FaasgenToml;
pub use handler_js::HandlerJs;
pub use index_js::IndexJs;
pub use package_json::PackageJson;
pub use root_package_json::RootPackageJson;
pub use template_yml::TemplateYml;

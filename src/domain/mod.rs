pub mod article;
pub mod subscription;

pub use article::Article;
pub use subscription::Subscription;

// Bannerstamp Library
// Stamps classification banners onto PNG and JPEG images

pub mod banner;
pub mod cli;
pub mod codec;
pub mod logging;
pub mod pipeline;

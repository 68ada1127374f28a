#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use cvtools_camera as camera;

#[doc(inline)]
pub use cvtools_image as image;

#[doc(inline)]
pub use cvtools_imgproc as imgproc;

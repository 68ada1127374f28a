use argh::FromArgs;
use log::info;
use ndarray::array;

use cvtools::camera::{distort_points_radial, project_points_pinhole, RadialDistortion};
use cvtools::image::{Image, ImageSize};
use cvtools::imgproc::filter::{laplacian, sobel_x, sobel_y};

#[derive(FromArgs)]
/// Run the camera and filter demos on synthetic data
struct Args {
    /// width of the synthetic test image
    #[argh(option, default = "64")]
    width: usize,

    /// height of the synthetic test image
    #[argh(option, default = "64")]
    height: usize,

    /// first radial distortion coefficient
    #[argh(option, default = "0.01")]
    k1: f64,

    /// second radial distortion coefficient
    #[argh(option, default = "-0.001")]
    k2: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // camera demo: distort a batch of normalized points, then project a
    // 3-D batch at several focal lengths
    let points = array![[0.1, 0.2], [0.3, 0.4], [0.0, 0.0]];
    let distortion = RadialDistortion {
        k1: args.k1,
        k2: args.k2,
    };
    let distorted = distort_points_radial(&points, &distortion)?;
    info!("original points:\n{points}");
    info!("distorted points:\n{distorted}");

    let points3d = array![[1.0, 1.0, 2.0], [2.0, 1.0, 4.0], [0.5, 0.5, 1.0]];
    for f in [200.0, 500.0, 1000.0] {
        let projected = project_points_pinhole(&points3d, f)?;
        info!("projection with f={f}:\n{projected}");
    }

    // filter demo: synthetic image with a vertical step in the middle
    let size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let half = size.width / 2;
    let data: Vec<f32> = (0..size.height)
        .flat_map(|_| (0..size.width).map(move |c| if c < half { 0.0 } else { 255.0 }))
        .collect();
    let img = Image::new(size, data)?;

    for (name, edges) in [
        ("sobel_x", sobel_x(&img)?),
        ("sobel_y", sobel_y(&img)?),
        ("laplacian", laplacian(&img)?),
    ] {
        let max = edges
            .as_slice()
            .iter()
            .fold(0.0f32, |m, &v| m.max(v.abs()));
        info!("{name}: max absolute response = {max}");
    }

    Ok(())
}

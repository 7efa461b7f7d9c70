use std::time::Instant;

use multibrot_explorer::{
    Complex, ComplexRect, ExplorerController, FilePresenterPort, FractalParams, PpmFilePresenter,
    Resolution, ViewState,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let view = ComplexRect::new(
        Complex {
            real: -2.0,
            imag: 2.0,
        },
        Complex {
            real: 2.0,
            imag: -2.0,
        },
    )?;
    let resolution = Resolution::new(800, 800)?;
    let params = FractalParams::default();
    let filepath = "output/multibrot.ppm";

    println!("Rendering multibrot set...");
    println!(
        "Image size: {}x{}",
        resolution.width(),
        resolution.height()
    );
    println!("Exponent: {}", params.exponent());
    println!("Max iterations: {}", params.max_iterations());

    let controller = ExplorerController::new(ViewState::new(view, resolution), params);

    let start = Instant::now();
    let buffer = controller.render()?;
    println!("Duration:   {:?}", start.elapsed());

    std::fs::create_dir_all("output")?;
    let presenter = PpmFilePresenter::new();
    presenter.present(&buffer, filepath)?;
    println!("Saved to {}", filepath);

    Ok(())
}

// The window and surface handling follows the pixels conway example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

use pixel_seed::auxiliary::config::Config;
use pixel_seed::error::AppError;
use pixel_seed::projects::seeded::run_seeded;

fn main() -> Result<(), AppError> {
    println!("\nWelcome to pixel_seed!\nEvery identifier paints its own image, and always the same one.");
    println!("\n\nControls:\nTYPE: edit the identifier\nENTER: draw it (unchanged draws a new random one)\nBACKSPACE: delete a character\nDELETE: clear\nESC: close screen\n");
    run_seeded(Config::default())
}

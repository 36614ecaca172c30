use std::io::{self, BufRead, Write};
use std::process;

fn main() -> io::Result<()> {
    print!("Enter a float value: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let value: f32 = match line.trim().parse() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("invalid float {:?}: {}", line.trim(), err);
            process::exit(1);
        }
    };

    if let Err(err) = customfloat::encode(value) {
        eprintln!("Error: {}", err);
    }
    print!("{}", customfloat::describe(value));

    Ok(())
}

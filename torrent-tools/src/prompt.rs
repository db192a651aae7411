use std::io::{self, BufRead, Write};

/// Asks for deletion confirmation on stdin.
///
/// Empty input, `y` and `Y` confirm; `n` and `N` decline; anything
/// else asks again. EOF declines.
pub fn ask_delete() -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("Delete? (Y/n) ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(false);
        }
        match input.trim() {
            "" | "y" | "Y" => return Ok(true),
            "n" | "N" => return Ok(false),
            _ => println!("I'm sorry, but I don't understand your choice."),
        }
    }
}

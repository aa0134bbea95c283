mod term;

use std::io;

fn main() -> io::Result<()> {
    term::run()
}

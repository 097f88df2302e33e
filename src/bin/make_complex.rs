use vecmap::complex::{make_complex, Complex};

fn main() {
    env_logger::init();

    let a: Complex<i32> = make_complex(4, 5);
    let b: Complex<f64> = make_complex(3.0, 2.0);
    let c: Complex<i32> = make_complex(1, 5.0);

    log::debug!("imaginary part of c truncated from 5.0 to {}", c.im);
    println!("{a}\n{b}\n{c}");
}

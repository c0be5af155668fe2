use anyhow::Result;
use linvec::Vector;

fn main() -> Result<()> {
    let x = Vector::new(&[1, 2, 3]);
    let y = Vector::new(&[4, 5, 6]);
    println!("x + y\n{}", (&x + &y)?);
    println!("x ⊙ y\n{}", x.hadamard(&y)?);
    println!("3x\n{}", x.scale(3));
    println!("0x\n{}", x.scale(0));

    let x = Vector::new(&[1.0, 2.0, 3.0, 4.0]);
    println!("x²\n{}", x.powi(2));

    let x = Vector::new(&[1.0, 10.0, 100.0, 1000.0, 10000.0, 100000.0]);
    println!("log10(x)\n{}", x.log10());

    let e = std::f64::consts::E;
    let x = Vector::new(&[1.0, e, e * e]);
    println!("ln(x)\n{}", x.ln());

    let x = Vector::new(&[1, 2, 3, 4]);
    let y = Vector::new(&[-4, -5, -6, -7]);
    println!("x · y = {}\n", x.dot(&y)?);

    let x = Vector::new(&[10, 20, 30, 40]);
    println!("shape of x = {:?}\n", x.shape());

    println!("zeros\n{}", Vector::<f64>::zeros(4));
    println!("ones\n{}", Vector::<f64>::ones(6));
    println!("twos\n{}", Vector::same(2.0, 4));

    Ok(())
}

use versor::{Quaternion, Mat3x3};

fn main() {
    env_logger::init();

    let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q2 = Quaternion::new(5.0, 6.0, 7.0, 8.0);

    println!("Addition: {}", q1 + q2);
    println!("Subtraction: {}", q1 - q2);
    println!("Multiplication: {}", q1 * q2);

    println!("Norm of q1: {}", q1.norm());
    println!("Conjugate of q1: {}", q1.conjugate());

    match q1.inverse() {
        Ok(inv) => {
            println!("Inverse of q1: {inv}");
        }
        Err(err) => {
            log::error!("{err}");
        }
    }

    let mat = Mat3x3::from(q1);
    println!("Rotation Matrix:");
    for i in 0..3 {
        let row = mat.row(i);
        println!("{} {} {}", row.x, row.y, row.z);
    }
}

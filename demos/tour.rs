//! Walk through every primitive and print its text form.
//!
//! Run with: cargo run --example tour --features tracing

use vprim::*;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let pt1 = Point::new(12, 23);
    println!("p 1:{pt1}");
    let pt2 = pt1;
    println!("p 2:{pt2}");
    let pt3 = pt1 + pt2;
    println!("p 3:{pt3}");
    println!("pt1 - pt2:\n{}", pt1 - pt2);
    println!("pt1 * 10:\n{}", pt1 * 10);
    let pt = Point::new(2, 1);
    println!("pt1.dot(pt):\n{}", pt1.dot(&pt));
    println!("pt1.cross(pt){}", pt1.cross(&pt));
    println!("Point3i:\n{}", Point3i::new(1, 2, 3));
    let sz1234 = Size::new(12, 34);
    println!("sz1234{sz1234}");
    println!("{}", Point::from(sz1234));

    println!("****************Scalar******************");
    println!("{}", Scalar::from_prefix(&[1.0, 2.0])?);
    println!("{}", Scalar::from_prefix(&[4.0, 5.0, 6.0])?);
    println!("Scalar(1){}", Scalar::from_prefix(&[1.0])?);

    println!("****************vec******************");
    let vec3d = Vec3d::new([1.0, 2.0, 3.0]);
    println!("vec3d{{1,2,3}}, 1:{}  2:{} 3:{}", vec3d.get(0)?, vec3d.get(1)?, vec3d.get(2)?);
    let vec3i = Vec3i::new([3, 2, 1]);
    println!("vec_add = vec3d + vec3i: {}", vec3d + vec3i.cast::<f64>());
    println!("vec3d *100{}", vec3d * 100.0);
    let d3 = Vec3d::new([2.0, 2.0, 3.0]);
    println!("vec_mul = vec3d.mul(d3): {}", vec3d.mul(d3));
    println!("norm{}", norm(&Vec2i::new([3, 4])));
    // out of range and wrong dimension come back as errors, not panics
    if let Err(e) = vec3d.get(3) {
        println!("vec3d.get(3): {e}");
    }
    if let Err(e) = Vec2i::new([1, 2]).try_cross(&Vec2i::new([3, 4])) {
        println!("Vec2i cross: {e}");
    }

    println!("****************Size******************");
    let sz = Size2d::new(1.2, 2.0);
    println!(" sz{{1.2,2.0}}:{sz}");
    println!(" sz{{1.2,2.0}} area:{}", sz.area());
    let szi = Size::new(4, 5);
    println!("szi{{ 4,5 }}:{szi}");
    println!("szi{{ 4,5 }} area::{}", szi.area());

    println!("****************Rect******************");
    let r1 = Rect2d::new(1.0, 2.0, 8.0, 5.0);
    println!("r1{{ 1,2,8,5 }}{r1}");
    println!("x:{} y:{} w{} h{}", r1.x, r1.y, r1.width, r1.height);
    println!("area {}", r1.area());
    println!("Size {}", r1.size());
    println!("tl {}", r1.tl());
    println!("br {}", r1.br());
    let r2 = Rect::from_origin_size(Point::new(2, 3), Size::new(3, 4));
    println!("r2 tl {}", r2.tl());
    println!("r2 br {}", r2.br());
    let r3 = Rect::from_corners(Point::new(2, 3), Point::new(4, 4));
    println!("tl{}", r3.tl());
    println!("br{}", r3.br());
    println!("Size:{}", r3.size());

    println!("****************RotatedRect******************");
    let rrect = RotatedRect::new(Point2f::new(5.0, 5.0), Size2f::new(3.0, 3.0), 45.0);
    println!("rRect{}", rrect.bounding_rect());

    println!("****************Matx******************");
    let mx23d = Matx23d::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    println!("mx23d:\n{mx23d}");
    println!("{}", mx23d * mx23d.t());
    println!("mx34{}", Matx34f::eye());

    println!("****************Range******************");
    let range = Range::new(1, 9);
    println!("{range}");
    if let Some(size) = range.size() {
        println!("{size}");
    }
    println!("{}", Range::all());

    Ok(())
}

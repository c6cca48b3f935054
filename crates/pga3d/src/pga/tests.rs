//! Cross-checks between the closed-form entities and the reference algebra.

use cgmath::InnerSpace;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::{Float, Vec3};

/// Small integer coefficients, for which every product is computed exactly.
fn coef() -> impl Strategy<Value = Float> {
    (-8_i32..=8).prop_map(Float::from)
}
fn any_point() -> impl Strategy<Value = Point> {
    prop::array::uniform4(coef()).prop_map(Point::from_array)
}
fn any_line() -> impl Strategy<Value = Line> {
    prop::array::uniform6(coef()).prop_map(Line::from_array)
}
fn any_plane() -> impl Strategy<Value = Plane> {
    prop::array::uniform4(coef()).prop_map(Plane::from_array)
}
fn any_flector() -> impl Strategy<Value = Flector> {
    prop::array::uniform8(coef()).prop_map(Flector::from_array)
}
fn any_motor() -> impl Strategy<Value = Motor> {
    prop::array::uniform8(coef()).prop_map(Motor::from_array)
}

fn vec3(range: std::ops::Range<Float>) -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(range).prop_map(|[x, y, z]| Vec3::new(x, y, z))
}
fn finite_point() -> impl Strategy<Value = Point> {
    vec3(-10.0..10.0).prop_map(Point::from_vec3)
}
/// Unit motor built from a rotation followed by a translation.
fn rigid_motor() -> impl Strategy<Value = Motor> {
    (vec3(-10.0..10.0), vec3(-1.0..1.0), -5.0..5.0)
        .prop_map(|(t, axis, angle)| {
            let r = Motor::try_from_angle_axis(axis, angle).unwrap_or(Motor::IDENT);
            Motor::from_translation(t) * r
        })
}

fn antiproduct(a: &impl AsMultivector, b: &impl AsMultivector) -> Multivector {
    Multivector::geometric_antiproduct(&a.as_multivector(), &b.as_multivector())
}

fn rodrigues(p: Vec3, axis: Vec3, angle: Float) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    p * cos + axis.cross(p) * sin + axis * axis.dot(p) * (1.0 - cos)
}

#[test]
fn test_motor_identity() {
    assert_eq!(Motor::IDENT.as_multivector(), Multivector::from_term(Term::unit(Axes::ANTISCALAR)));
    let p = Point::from_coords(1.0, 2.0, 3.0, 1.0);
    assert_eq!(Motor::IDENT.apply_to_point(p), p);
}

#[test]
fn test_entity_display() {
    let line = Line::from_direction_and_moment(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(line.to_string(), "-1*e34 + 1*e13");
    assert_eq!(Motor::IDENT.to_string(), "1*e1234");
    assert_eq!(Plane::default().to_string(), "0");
}

proptest! {
    #[test]
    fn proptest_entities_roundtrip_through_multivector(
        p in any_point(),
        l in any_line(),
        h in any_plane(),
        f in any_flector(),
        m in any_motor(),
    ) {
        assert_eq!(p.as_multivector().to_point(), p);
        assert_eq!(l.as_multivector().to_line(), l);
        assert_eq!(h.as_multivector().to_plane(), h);
        assert_eq!(f.as_multivector().to_flector(), f);
        assert_eq!(m.as_multivector().to_motor(), m);

        assert_eq!(p.as_multivector().grade_project(1), p.as_multivector());
        assert_eq!(l.as_multivector().grade_project(2), l.as_multivector());
        assert_eq!(h.as_multivector().grade_project(3), h.as_multivector());
    }

    #[test]
    fn proptest_motor_antiproducts(m in any_motor(), q in any_motor(), p in any_point(), f in any_flector()) {
        assert_eq!(m.inv_geometric_antiprod_with_point(p), antiproduct(&p, &m).to_flector());
        assert_eq!(m.geometric_antiprod_with_point(p), antiproduct(&m, &p).to_flector());
        assert_eq!(m.geometric_antiprod_with_flector(f), antiproduct(&m, &f).to_flector());
        assert_eq!(m.geometric_antiproduct_with_motor(q), antiproduct(&m, &q).to_motor());
        assert_eq!(m * q, m.geometric_antiproduct_with_motor(q));
    }

    #[test]
    fn proptest_motor_geometric_product(m in any_motor(), q in any_motor()) {
        let expected = Multivector::geometric_product(&m.as_multivector(), &q.as_multivector());
        assert_eq!(m.geometric_product_with_motor(q), expected.to_motor());
    }

    #[test]
    fn proptest_motor_unary_ops(m in any_motor()) {
        let mv = m.as_multivector();
        assert_eq!(m.left_complement(), mv.left_complement().to_motor());
        assert_eq!(m.right_complement(), mv.right_complement().to_motor());
        assert_eq!(m.antireverse(), mv.antireverse().to_motor());
        assert_eq!(m.left_complement().right_complement(), m);
        assert_eq!((-m).to_array(), m.to_array().map(|x| -x));
    }

    #[test]
    fn proptest_apply_to_point_is_sandwich(m in any_motor(), p in any_point()) {
        let sandwich = Multivector::geometric_antiproduct(
            &antiproduct(&m, &p),
            &m.antireverse().as_multivector(),
        );
        assert_eq!(m.apply_to_point(p), sandwich.to_point());
    }

    #[test]
    fn proptest_join_is_wedge(p in any_point(), q in any_point(), l in any_line()) {
        let wedge = |a: &dyn AsMultivector, b: &dyn AsMultivector| {
            Multivector::wedge(&a.as_multivector(), &b.as_multivector())
        };
        assert_eq!(Line::from_two_points(p, q), wedge(&p, &q).to_line());
        assert_eq!(Plane::from_line_and_point(l, p), wedge(&l, &p).to_plane());
    }

    #[test]
    fn proptest_meet_is_antiwedge(f in any_plane(), g in any_plane(), l in any_line()) {
        let antiwedge = |a: &dyn AsMultivector, b: &dyn AsMultivector| {
            Multivector::antiwedge(&a.as_multivector(), &b.as_multivector())
        };
        assert_eq!(
            Line::from_intersection_of_two_planes(f, g),
            antiwedge(&g, &f).to_line(),
        );
        assert_eq!(Point::from_plane_and_line(f, l), antiwedge(&l, &f).to_point());
    }

    #[test]
    fn proptest_incidence(p in any_point(), q in any_point(), r in any_point()) {
        // Exact arithmetic, so "lies on" is exact too.
        let line = Line::from_two_points(p, q);
        let plane = Plane::from_line_and_point(line, r);
        let on_plane = |x: Point| Multivector::antiwedge(&plane.as_multivector(), &x.as_multivector());
        for x in [p, q, r] {
            assert_eq!(on_plane(x), Multivector::ZERO);
        }
        let meet = Point::from_plane_and_line(plane, line);
        assert_eq!(Multivector::wedge(&line.as_multivector(), &meet.as_multivector()), Multivector::ZERO);
    }

    #[test]
    fn proptest_translations_commute_and_add(a in vec3(-10.0..10.0), b in vec3(-10.0..10.0), p in finite_point()) {
        let ta = Motor::from_translation(a);
        let tb = Motor::from_translation(b);
        let direct = Motor::from_translation(a + b).apply_to_point(p);
        assert_approx_eq!(tb.apply_to_point(ta.apply_to_point(p)), direct);
        assert_approx_eq!(ta.apply_to_point(tb.apply_to_point(p)), direct);
        assert_approx_eq!(ta * tb, tb * ta);
        assert_approx_eq!(direct.to_array()[3], 1.0);
        assert_approx_eq!(
            Point::from_vec3(p.to_vec3() + a + b),
            direct,
        );
    }

    #[test]
    fn proptest_rotation_matches_rodrigues(axis in vec3(-1.0..1.0), angle in -5.0..5.0, p in finite_point()) {
        prop_assume!(axis.magnitude() > 0.1);
        let axis = axis.normalize();
        let rotated = Motor::from_angle_axis(axis, angle).apply_to_point(p);
        assert_approx_eq!(rotated, Point::from_vec3(rodrigues(p.to_vec3(), axis, angle)));
    }

    #[test]
    fn proptest_composition_applies_right_operand_first(a in rigid_motor(), b in rigid_motor(), p in finite_point()) {
        assert_approx_eq!((a * b).apply_to_point(p), a.apply_to_point(b.apply_to_point(p)));
        assert_approx_eq!(a.transform(&p), a.apply_to_point(p));
        assert_approx_eq!((a * b).rotor_norm2(), 1.0);
    }

    #[test]
    fn proptest_inverse_motions_commute(m in rigid_motor()) {
        let inv = m.antireverse();
        assert_approx_eq!(m * inv, inv * m);
        assert_approx_eq!(m * inv, Motor::IDENT);
    }
}

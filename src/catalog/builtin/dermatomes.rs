use crate::model::BodyRegion::*;
use crate::model::DermatomeLevel::*;
use crate::model::Dermatome;

/// Dermatome registry, C3 through S2.
pub fn dermatomes() -> Vec<Dermatome> {
    vec![
        Dermatome::new(C3, [Neck], "Lower posterior neck, upper back of head")
            .with_landmarks(["Supraclavicular region", "Lower occiput"])
            .with_color("#FF6B6B")
            .with_test_point("Supraclavicular fossa"),
        Dermatome::new(C4, [ShoulderLeft, ShoulderRight, Neck], "Upper shoulder, lower neck")
            .with_landmarks(["Tip of shoulder", "Clavicle area"])
            .with_color("#FF8E72")
            .with_test_point("Over acromioclavicular joint"),
        Dermatome::new(C5, [ShoulderLeft, ShoulderRight, ArmLeft, ArmRight], "Lateral shoulder, lateral upper arm")
            .with_landmarks(["Deltoid area", "Lateral arm to elbow"])
            .with_color("#FFB347")
            .with_test_point("Lateral antecubital fossa"),
        Dermatome::new(C6, [ArmLeft, ArmRight], "Lateral forearm, thumb, index finger")
            .with_landmarks(["Radial forearm", "Thumb", "Index finger"])
            .with_color("#FFD93D")
            .with_test_point("Dorsum of thumb"),
        Dermatome::new(C7, [ArmLeft, ArmRight], "Middle finger, posterior forearm")
            .with_landmarks(["Middle finger", "Back of forearm"])
            .with_color("#6BCB77")
            .with_test_point("Middle finger"),
        Dermatome::new(C8, [ArmLeft, ArmRight], "Medial forearm, ring and little finger")
            .with_landmarks(["Ulnar forearm", "Ring finger", "Little finger"])
            .with_color("#4D96FF")
            .with_test_point("Little finger"),
        Dermatome::new(T1, [ArmLeft, ArmRight, ChestAnterior], "Medial upper arm, axilla")
            .with_landmarks(["Inner arm", "Armpit area"])
            .with_color("#9B59B6")
            .with_test_point("Medial antecubital fossa"),
        // Axillary apex is charted with the chest; the arm strip ends at T1.
        Dermatome::new(T2, [ChestAnterior], "Upper inner arm, upper chest")
            .with_landmarks(["Apex of axilla", "Upper chest"])
            .with_color("#8E44AD")
            .with_test_point("Apex of axilla"),
        Dermatome::new(T3, [ChestAnterior, ChestPosterior], "Upper chest at third intercostal space")
            .with_landmarks(["Third rib area"])
            .with_color("#E74C3C")
            .with_test_point("Third intercostal space, midclavicular line"),
        Dermatome::new(T4, [ChestAnterior, ChestPosterior], "Nipple line")
            .with_landmarks(["Nipple level", "Fourth rib"])
            .with_color("#E67E22")
            .with_test_point("Nipple level"),
        Dermatome::new(T5, [ChestAnterior, ChestPosterior], "Between nipple and xiphoid")
            .with_landmarks(["Fifth intercostal space"])
            .with_color("#F39C12")
            .with_test_point("Fifth intercostal space, midclavicular line"),
        Dermatome::new(T6, [ChestAnterior, Epigastrium], "Xiphoid process level")
            .with_landmarks(["Xiphoid", "Lower sternum"])
            .with_color("#27AE60")
            .with_test_point("Xiphoid process level"),
        Dermatome::new(T7, [Epigastrium], "Upper epigastric region")
            .with_landmarks(["Below xiphoid"])
            .with_color("#1ABC9C")
            .with_test_point("Costal margin, midclavicular line"),
        Dermatome::new(T8, [Epigastrium, RightUpperQuadrant, LeftUpperQuadrant], "Mid-epigastric region")
            .with_landmarks(["Upper abdomen"])
            .with_color("#3498DB")
            .with_test_point("Midway between xiphoid and umbilicus"),
        Dermatome::new(T9, [RightUpperQuadrant, LeftUpperQuadrant], "Upper lateral abdomen")
            .with_landmarks(["Below costal margin"])
            .with_color("#2980B9")
            .with_test_point("Upper lateral abdomen"),
        Dermatome::new(T10, [Periumbilical], "Umbilicus level")
            .with_landmarks(["Belly button", "Navel"])
            .with_color("#9B59B6")
            .with_test_point("Umbilicus"),
        Dermatome::new(T11, [RightLowerQuadrant, LeftLowerQuadrant], "Below umbilicus")
            .with_landmarks(["Lower lateral abdomen"])
            .with_color("#8E44AD")
            .with_test_point("Below umbilicus, lateral"),
        Dermatome::new(T12, [RightLowerQuadrant, LeftLowerQuadrant, GroinLeft, GroinRight], "Suprapubic and inguinal region")
            .with_landmarks(["Above pubic bone", "Inguinal area"])
            .with_color("#E91E63")
            .with_test_point("Inguinal ligament midpoint"),
        Dermatome::new(L1, [GroinLeft, GroinRight, ThighAnterior], "Inguinal region, upper anterior thigh")
            .with_landmarks(["Groin crease", "Upper thigh"])
            .with_color("#FF5722")
            .with_test_point("Upper anterior thigh"),
        Dermatome::new(L2, [ThighAnterior], "Anterior mid-thigh")
            .with_landmarks(["Front of thigh"])
            .with_color("#FF9800")
            .with_test_point("Mid-anterior thigh"),
        Dermatome::new(L3, [ThighAnterior, Knee], "Lower anterior thigh, knee")
            .with_landmarks(["Lower thigh", "Knee area"])
            .with_color("#FFC107")
            .with_test_point("Medial knee"),
        Dermatome::new(L4, [Knee, Leg], "Medial leg, medial ankle")
            .with_landmarks(["Inner calf", "Medial malleolus"])
            .with_color("#CDDC39")
            .with_test_point("Medial malleolus"),
        Dermatome::new(L5, [Leg, Foot], "Lateral leg, dorsum of foot, great toe")
            .with_landmarks(["Outer calf", "Top of foot", "Big toe"])
            .with_color("#8BC34A")
            .with_test_point("Dorsum of foot at third metatarsal"),
        Dermatome::new(S1, [ThighPosterior, Leg, Foot], "Posterior thigh, lateral foot, little toe")
            .with_landmarks(["Back of thigh", "Outer foot", "Small toe"])
            .with_color("#4CAF50")
            .with_test_point("Lateral heel"),
        Dermatome::new(S2, [ThighPosterior], "Posterior thigh, popliteal fossa")
            .with_landmarks(["Back of knee", "Upper calf"])
            .with_color("#009688")
            .with_test_point("Popliteal fossa"),
    ]
}

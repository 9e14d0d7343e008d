use crate::model::{AtypicalPresentation, EducationEntry, PatternRef};
use super::strings;

/// Education annex, one entry per pattern.
pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            pattern_id: "cardiac-referred-pain".into(),
            clinical_relevance: "Recognition of cardiac referred pain is critical for rapid MI diagnosis. Atypical presentations (jaw, epigastrium) may delay treatment.".into(),
            diagnostic_importance: "Left arm/jaw pain with chest discomfort highly specific for cardiac ischemia; epigastric presentation may mimic GI disease.".into(),
            classic_presentation: "Substernal pressure radiating to left arm and jaw, with diaphoresis and dyspnea.".into(),
            atypical_presentations: vec![
                AtypicalPresentation::new("Isolated jaw or dental pain", "Women, elderly, diabetics", "~20% of MIs in women", "New jaw pain with exertion warrants cardiac workup"),
                AtypicalPresentation::new("Epigastric discomfort only", "Elderly, diabetics (neuropathy)", "~10% of acute coronary syndromes", "\"Indigestion\" unresponsive to antacids in cardiac risk patient needs ECG"),
                AtypicalPresentation::new("Isolated dyspnea without chest pain", "Elderly, women", "~15% of MIs", "Sudden dyspnea in elderly may be \"anginal equivalent\""),
            ],
            differential_considerations: strings(&["GERD", "Esophageal spasm", "Costochondritis", "Aortic dissection", "Pulmonary embolism"]),
            red_flags: strings(&["Pain at rest >20 minutes", "Associated diaphoresis", "New heart failure symptoms", "Hypotension"]),
            related_patterns: refs(&["diaphragm-referred-pain"]),
        },
        EducationEntry {
            pattern_id: "gallbladder-referred-pain".into(),
            clinical_relevance: "Right shoulder pain after fatty meals is classic for biliary disease; shoulder-only presentation may be missed.".into(),
            diagnostic_importance: "Shoulder tip pain (positive Kehr's sign) with RUQ pain strongly suggests hepatobiliary pathology.".into(),
            classic_presentation: "RUQ colicky pain after fatty meal, radiating to right scapula, with nausea.".into(),
            atypical_presentations: vec![
                AtypicalPresentation::new("Isolated right shoulder pain", "May occur without abdominal symptoms", "Uncommon as sole symptom", "Consider RUQ ultrasound if no orthopedic cause found"),
                AtypicalPresentation::new("Epigastric pain only", "Common variant", "~40% of biliary colic", "May be mistaken for peptic ulcer disease"),
            ],
            differential_considerations: strings(&["Peptic ulcer disease", "Hepatitis", "Pancreatitis", "Right lower lobe pneumonia", "Fitz-Hugh-Curtis syndrome"]),
            red_flags: strings(&["Fever >38.5°C", "Jaundice", "Palpable gallbladder", "Peritoneal signs"]),
            related_patterns: refs(&["diaphragm-referred-pain", "pancreatic-referred-pain"]),
        },
        EducationEntry {
            pattern_id: "diaphragm-referred-pain".into(),
            clinical_relevance: "Kehr's sign (left shoulder pain) in trauma patient is highly specific for splenic injury and hemoperitoneum.".into(),
            diagnostic_importance: "Shoulder tip pain following abdominal trauma or surgery suggests diaphragmatic irritation - urgent evaluation needed.".into(),
            classic_presentation: "Left shoulder tip pain worsening when supine, following blunt abdominal trauma.".into(),
            atypical_presentations: vec![
                AtypicalPresentation::new("Right shoulder pain post-surgery", "Post-laparoscopic surgery (CO2 irritation)", "Common (50-80% post-laparoscopy)", "Usually benign and self-limited; resolves in 24-48h"),
                AtypicalPresentation::new("Bilateral shoulder pain", "Large hemoperitoneum or pneumoperitoneum", "Uncommon", "Suggests significant intraperitoneal pathology"),
            ],
            differential_considerations: strings(&["Rotator cuff injury", "Cervical radiculopathy", "Acute coronary syndrome", "Pleural effusion"]),
            red_flags: strings(&["Hypotension", "Tachycardia", "History of trauma", "Rigid abdomen"]),
            related_patterns: refs(&["cardiac-referred-pain", "gallbladder-referred-pain"]),
        },
        EducationEntry {
            pattern_id: "appendix-referred-pain".into(),
            clinical_relevance: "The classic migration from periumbilical to RLQ pain is pathognomonic for appendicitis.".into(),
            diagnostic_importance: "Understanding the sequence helps differentiate appendicitis from other causes of abdominal pain.".into(),
            classic_presentation: "Periumbilical pain for 12-24h, then localizing to McBurney's point with anorexia and low-grade fever.".into(),
            atypical_presentations: vec![
                AtypicalPresentation::new("Retrocecal appendix presentation", "Any patient with retrocecal appendix (~30%)", "Common anatomical variant", "May present with flank or back pain; less peritoneal signs"),
                AtypicalPresentation::new("Pelvic appendix presentation", "Patients with pelvic appendix", "~5% of appendixes", "May have suprapubic pain, urinary symptoms, or tenesmus"),
                AtypicalPresentation::new("Pain starting in RLQ", "Variable", "Up to 50% skip periumbilical phase", "Lack of migration doesn't rule out appendicitis"),
            ],
            differential_considerations: strings(&["Mesenteric lymphadenitis", "Meckel's diverticulum", "Ovarian pathology", "Ectopic pregnancy", "Crohn's disease"]),
            red_flags: strings(&["Rebound tenderness", "Guarding", "High fever", "Rigid abdomen"]),
            related_patterns: refs(&["renal-ureteral-referred-pain"]),
        },
        EducationEntry {
            pattern_id: "renal-ureteral-referred-pain".into(),
            clinical_relevance: "The migratory pattern of renal colic helps localize the stone and predict passage.".into(),
            diagnostic_importance: "Flank-to-groin migration with hematuria is classic for ureteral stone.".into(),
            classic_presentation: "Severe colicky flank pain radiating to groin, with hematuria and nausea.".into(),
            atypical_presentations: vec![
                AtypicalPresentation::new("Testicular or labial pain only", "Distal ureteral stone", "Common with UVJ stones", "Always consider ureteral stone in unexplained testicular pain with normal exam"),
                AtypicalPresentation::new("Isolated flank pain", "Renal pelvis or proximal ureteral stone", "Common early presentation", "May mimic musculoskeletal pain; check urinalysis"),
            ],
            differential_considerations: strings(&["Pyelonephritis", "Abdominal aortic aneurysm", "Ovarian torsion", "Appendicitis", "Musculoskeletal strain"]),
            red_flags: strings(&["Fever (suggests infection)", "Single kidney", "Bilateral obstruction", "Anuria"]),
            related_patterns: refs(&["appendix-referred-pain"]),
        },
        EducationEntry {
            pattern_id: "pancreatic-referred-pain".into(),
            clinical_relevance: "Back radiation and relief with forward leaning are key features distinguishing pancreatitis from other causes of epigastric pain.".into(),
            diagnostic_importance: "Band-like epigastric pain radiating to back suggests pancreatic origin.".into(),
            classic_presentation: "Severe epigastric pain boring through to the back, worse supine, better leaning forward.".into(),
            atypical_presentations: vec![
                AtypicalPresentation::new("Isolated back pain", "May occur in chronic pancreatitis", "Uncommon as sole symptom", "Check lipase in unexplained mid-back pain with GI risk factors"),
                AtypicalPresentation::new("Left upper quadrant predominant", "Tail of pancreas pathology", "Anatomical variant presentation", "May mimic splenic pathology"),
            ],
            differential_considerations: strings(&["Peptic ulcer disease", "Biliary colic", "Abdominal aortic aneurysm", "Mesenteric ischemia", "Inferior MI"]),
            red_flags: strings(&["Cullen's sign (periumbilical ecchymosis)", "Grey Turner's sign (flank ecchymosis)", "Hypotension", "Hypocalcemia"]),
            related_patterns: refs(&["gallbladder-referred-pain"]),
        },
    ]
}

fn refs(ids: &[&str]) -> Vec<PatternRef> {
    ids.iter().map(|&id| PatternRef::from(id)).collect()
}

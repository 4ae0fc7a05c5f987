//! Closed sets of permitted categorical values.
//!
//! Membership validators and generators both draw from these; a value
//! outside its set is rejected at save time.

pub const SYMPTOMS: &[&str] = &[
    "abdomen pain",
    "back pain",
    "chest pain",
    "ear pain",
    "head pain",
    "pelvis pain",
    "tooth pain",
    "Vagina pain",
    "rectum pain",
    "skin pain",
    "Extremities pain",
    "Chronic pain",
    "Chills",
    "Fever",
    "Paresthesia (numbness, tingling, electric tweaks)",
    "Light-headed",
    "Dizzy",
    "Dizzy – about to black out",
    "Dizzy – with the room spinning around me",
    "My mouth is dry",
    "Nauseated",
    "Sick",
    "like I have the flu",
    "like I have to vomit",
    "Short of breath",
    "Sleepy",
    "Sweaty",
    "Thirsty",
    "Tired",
    "Weak",
    "Can't Breathe normally",
    "Losing hearing",
    "Sounds are too loud",
    "Ringing or hissing in my ears",
    "Can't move one side – arm and/or leg",
    "Can't Pass a bowel action normally",
    "Can't Pass urine normally",
    "Can't Remember normally",
    "Blindness",
    "blurred vision",
    "double vision",
    "Can't Sleep normally",
    "Can't Smell things normally",
    "Can't Speak normally",
    "Can't Stop passing watery bowel actions",
    "Can't Stop scratching",
    "Can't Stop sweating",
    "Can't Swallow normally",
    "Can't Taste properly",
    "Can't Walk normally",
    "Can't Write normally",
];

/// Staff roles. `admin` is second to last, `doctor` last; the staff
/// generator relies on that ordering when it forces the single admin.
pub const STAFF_DESIGNATIONS: &[&str] = &[
    "nurse",
    "compounder",
    "cashier",
    "receptionist",
    "admin",
    "doctor",
];

/// Doctor specialities. The leading empty entry marks a doctor with no
/// declared speciality.
pub const DOCTOR_DESIGNATIONS: &[&str] = &[
    "",
    "Allergist",
    "Anaesthesiologist",
    "Andrologist",
    "Cardiologist",
    "Cardiac Electrophysiologist",
    "Dermatologist",
    "Emergency Room (ER) Doctors",
    "Endocrinologist",
    "Epidemiologist",
    "Family Medicine Physician",
    "Gastroenterologist",
    "Geriatrician",
    "Hyperbaric Physician",
    "Hematologist",
    "Hepatologist",
    "Immunologist",
    "Infectious Disease Specialist",
    "Intensivist",
    "Internal Medicine Specialist",
    "Maxillofacial Surgeon / Oral Surgeon",
    "Medical Examiner",
    "Medical Geneticist",
    "Neonatologist",
    "Nephrologist",
    "Neurologist",
    "Neurosurgeon",
    "Nuclear Medicine Specialist",
    "Obstetrician/Gynecologist (OB/GYN)",
    "Occupational Medicine Specialist",
    "Oncologist",
    "Ophthalmologist",
    "Orthopedic Surgeon / Orthopedist",
    "Otolaryngologist (also ENT Specialist)",
    "Parasitologist",
    "Pathologist",
    "Perinatologist",
    "Periodontist",
    "Pediatrician",
    "Physiatrist",
    "Plastic Surgeon",
    "Psychiatrist",
    "Pulmonologist",
    "Radiologist",
    "Rheumatologist",
    "Sleep Doctor / Sleep Disorders Specialist",
    "Spinal Cord Injury Specialist",
    "Sports Medicine Specialist",
    "Surgeon",
    "Thoracic Surgeon",
    "Urologist",
    "Vascular Surgeon",
    "Veterinarian",
    "Acupuncturist",
    "Audiologist",
    "Ayurvedic Practioner",
    "Chiropractor",
    "Diagnostician",
    "Homeopathic Doctor",
    "Microbiologist",
    "Naturopathic Doctor",
    "Palliative care specialist",
    "Pharmacist",
    "Physiotherapist",
    "Podiatrist / Chiropodist",
    "Registered Massage Therapist",
];

pub const PAYMENT_TYPES: &[&str] = &["Cash", "Credit card", "Free"];

/// Appointment lifecycle states. Generators only draw the first five;
/// `Cancelled` is reachable through the API surface, not through seeding.
pub const APPOINTMENT_STATUS: &[&str] = &[
    "New",
    "Reviewed",
    "Assigned",
    "Completed",
    "Rejected",
    "Cancelled",
];

pub const LEAVE_APPLY_STATUS: &[&str] = &["New", "Approved", "Rejected"];

pub const EVENT_TYPES: &[&str] = &[
    "Consultation",
    "Surgery",
    "Vaccination",
    "Health screening",
    "Staff training",
    "Conference",
];

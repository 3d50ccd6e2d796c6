//! Built-in reference tables used when no configuration overrides them.

use crate::domain::model::{ServiceCatalog, ServiceEntry, Testimonial, TimeSlotCatalog};

pub const PRACTICE_NAME: &str = "Beyond Smile Dental Care";
pub const PRACTICE_EMAIL: &str = "beyondsmiledentalcare@gmail.com";
pub const DESTINATION_IDENTIFIER: &str = "+919549213923";
pub const MESSAGING_HOST: &str = "wa.me";
pub const RESET_DELAY_MS: u64 = 1000;

const SERVICES: [(&str, &str); 10] = [
    ("general", "General Checkup & Cleaning"),
    ("cosmetic", "Cosmetic Dentistry"),
    ("implants", "Dental Implants"),
    ("orthodontics", "Orthodontics/Invisalign"),
    ("root-canal", "Root Canal Therapy"),
    ("extraction", "Tooth Extraction"),
    ("whitening", "Teeth Whitening"),
    ("pediatric", "Pediatric Dentistry"),
    ("emergency", "Emergency Care"),
    ("consultation", "Consultation Only"),
];

const TIME_SLOTS: [&str; 9] = [
    "8:00 AM", "9:00 AM", "10:00 AM", "11:00 AM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM",
];

pub fn default_services() -> Vec<ServiceEntry> {
    SERVICES
        .iter()
        .map(|(code, label)| ServiceEntry::new(*code, *label))
        .collect()
}

pub fn service_catalog() -> ServiceCatalog {
    ServiceCatalog::new(default_services())
}

pub fn default_time_slots() -> Vec<String> {
    TIME_SLOTS.iter().map(|slot| slot.to_string()).collect()
}

pub fn time_slot_catalog() -> TimeSlotCatalog {
    TimeSlotCatalog::new(default_time_slots())
}

pub fn default_testimonials() -> Vec<Testimonial> {
    let entry = |id, name: &str, location: &str, text: &str, treatment: &str, media| Testimonial {
        id,
        name: name.to_string(),
        location: location.to_string(),
        rating: 5,
        text: text.to_string(),
        treatment_label: treatment.to_string(),
        has_before_after_media: media,
    };

    vec![
        entry(
            1,
            "Sarah Williams",
            "Downtown Resident",
            "Dr. Johnson completely transformed my smile! The veneers look so natural, and the entire team made me feel comfortable throughout the process. I can't stop smiling now!",
            "Porcelain Veneers",
            true,
        ),
        entry(
            2,
            "Michael Thompson",
            "Westside",
            "I was terrified of going to the dentist, but Dr. Rodriguez and her team were amazing with my 8-year-old daughter. She actually looks forward to her appointments now!",
            "Pediatric Care",
            false,
        ),
        entry(
            3,
            "Jennifer Chen",
            "Eastside",
            "The Invisalign treatment with Dr. Chen exceeded my expectations. Professional, thorough, and the results speak for themselves. Highly recommend!",
            "Invisalign Treatment",
            false,
        ),
        entry(
            4,
            "Robert Davis",
            "Suburb Resident",
            "Emergency dental care at 10 PM on a Saturday - they were there for me! Quick, professional, and got me out of pain immediately. True lifesavers!",
            "Emergency Care",
            false,
        ),
        entry(
            5,
            "Maria Garcia",
            "Central District",
            "Lisa is the best hygienist I've ever had. Gentle, thorough, and always takes time to explain proper care techniques. My teeth have never felt cleaner!",
            "Dental Cleaning",
            false,
        ),
        entry(
            6,
            "David Park",
            "North Hills",
            "The dental implant process was seamless. Dr. Johnson's expertise and the team's support made what I thought would be a difficult procedure very manageable.",
            "Dental Implants",
            false,
        ),
    ]
}

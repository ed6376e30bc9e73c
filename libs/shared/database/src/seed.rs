// Fixed records loaded into every new store.

use shared_models::{NewGalleryItem, NewService, NewTestimonial};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn service(
    name: &str,
    slug: &str,
    description: &str,
    category: &str,
    base_price: &str,
    duration: &str,
    features: &[&str],
) -> NewService {
    NewService {
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        base_price: Some(base_price.to_string()),
        duration: Some(duration.to_string()),
        features: strings(features),
        is_active: true,
    }
}

pub fn services() -> Vec<NewService> {
    vec![
        service(
            "Preventive Care",
            "preventive-care",
            "Regular cleanings, scaling, polishing, and checkups to maintain optimal oral health and prevent dental issues.",
            "preventive",
            "25000",
            "60 minutes",
            &["Deep cleaning and scaling", "Oral health assessments", "Fluoride treatments", "Dental x-rays"],
        ),
        service(
            "Cosmetic Dentistry",
            "cosmetic-dentistry",
            "Transform your smile with teeth whitening, veneers, and Hollywood smile makeovers for confidence-boosting results.",
            "cosmetic",
            "80000",
            "90 minutes",
            &["Professional teeth whitening", "Porcelain veneers", "Smile makeovers", "Composite bonding"],
        ),
        service(
            "Restorative Dentistry",
            "restorative-dentistry",
            "Complete restoration solutions including fillings, crowns, bridges, and implants to restore function and appearance.",
            "restorative",
            "60000",
            "120 minutes",
            &["Dental fillings and root canals", "Crowns and bridges", "Dental implants", "Tooth extractions"],
        ),
        service(
            "Pediatric Dentistry",
            "pediatric-dentistry",
            "Gentle, child-friendly dental care using our Tell-Show-Do approach to ensure comfort and positive experiences.",
            "pediatric",
            "20000",
            "45 minutes",
            &["Child-friendly examinations", "Preventive care for kids", "Comfort-focused approach", "Parent education"],
        ),
        service(
            "Orthodontics",
            "orthodontics",
            "Invisible aligners and modern orthodontic solutions for straight, perfectly aligned teeth without traditional braces.",
            "orthodontic",
            "150000",
            "30 minutes",
            &["Clear invisible aligners", "Teeth alignment correction", "Bite adjustment therapy", "Progress monitoring"],
        ),
        service(
            "Virtual Consultations",
            "virtual-consultations",
            "Convenient online consultations for treatment planning, follow-ups, and dental health advice from anywhere.",
            "virtual",
            "10000",
            "30 minutes",
            &["Remote consultations", "Treatment planning", "Follow-up appointments", "Digital prescriptions"],
        ),
    ]
}

fn testimonial(name: &str, location: &str, content: &str, service: &str) -> NewTestimonial {
    NewTestimonial {
        name: name.to_string(),
        location: location.to_string(),
        rating: Some("5.0".to_string()),
        content: content.to_string(),
        service: Some(service.to_string()),
        is_visible: true,
    }
}

pub fn testimonials() -> Vec<NewTestimonial> {
    vec![
        testimonial(
            "Adaeze Okwu",
            "HR Manager, Ikoyi",
            "Dr. Yemisi came to our office in VI and gave the entire team dental checkups. It was so convenient and professional. No more struggling with Lagos traffic to get to a dental clinic!",
            "Preventive Care",
        ),
        testimonial(
            "Funmi Adeleke",
            "Bride, Lekki",
            "The bridal teeth whitening package was perfect! Dr. Yemisi made my smile camera-ready for my wedding. She even came to my home for the treatment. Highly recommend!",
            "Cosmetic Dentistry",
        ),
        testimonial(
            "Chike Okafor",
            "Son of Patient, Festac",
            "My elderly mother couldn't travel to a clinic anymore. The home visit service was a godsend. Professional, gentle, and caring treatment right in our living room.",
            "Preventive Care",
        ),
    ]
}

const WHITENING_IMAGE: &str = "https://images.unsplash.com/photo-1606811971618-4486d14f3f99?w=400";
const VENEERS_IMAGE: &str = "https://pixabay.com/get/g3ca954fbceacf2297e09ae62fd2def23b3daa1af93cbe459d7c4844d873a125fcb5f46dbe60e05258648c8701daa8ca9e557f4f576df507621349e56bd270b3b_1280.jpg";
const RESTORATION_IMAGE: &str = "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400";

fn gallery_item(
    title: &str,
    category: &str,
    image: &str,
    description: &str,
    treatment_type: &str,
    duration: &str,
) -> NewGalleryItem {
    NewGalleryItem {
        title: title.to_string(),
        category: category.to_string(),
        before_image: Some(image.to_string()),
        after_image: Some(image.to_string()),
        description: Some(description.to_string()),
        treatment_type: Some(treatment_type.to_string()),
        duration: Some(duration.to_string()),
        is_visible: true,
    }
}

pub fn gallery_items() -> Vec<NewGalleryItem> {
    vec![
        gallery_item(
            "Professional Whitening",
            "whitening",
            WHITENING_IMAGE,
            "8 shades whiter in just 3 sessions with our advanced whitening system.",
            "Whitening",
            "3 Sessions",
        ),
        gallery_item(
            "Complete Makeover",
            "veneers",
            VENEERS_IMAGE,
            "Porcelain veneers created a perfect Hollywood smile for this bride-to-be.",
            "Veneers",
            "Hollywood Smile",
        ),
        gallery_item(
            "Tooth Restoration",
            "restoration",
            RESTORATION_IMAGE,
            "Complete restoration of damaged teeth with natural-looking crowns.",
            "Restoration",
            "Crown & Bridge",
        ),
    ]
}

//! Bundled sample résumé, served so a client can prefill the form for a demo
//! run without uploading anything.

pub const SAMPLE_RESUME: &str = r#"RAGHVENDRA
SINGH
Phone : +91-8130670022
Email : raghavsingh0027@gmail.com
City : Hyderabad, India
LinkedIn :https://www.linkedin.com/in/raghvendra0027

OBJECTIVE
Ecommerce specialist with 5 years of experience in ecommerce, digital marketing and operations with
excellent data analytics skills. Proven track record of driving ecommerce growth and optimization of
ecommerce processes while driving monthly revenues of upto INR 2 Cr+ through D2C & ecommerce
operations in India & North America. Seeking a challenging role in a good organization to further develop and
utilize my skills in a leadership role.

SKILLS
 Ecommerce platforms: Shopify, Amazon, Myntra, AJIO, Tata Cliq, Flipkart, Nykaa fashion
 Key Marketplaces & seller platforms: Shopify, Amazon, Myntra, AJIO, Tata Cliq, Flipkart, Nykaa fashion
 ERP & OMS handled: Ginesys, Browntape, FYND, Unicommerce, Shiprocket, Delhivery, SAP, Salesforce
 Digital marketing: Google Ads, Meta Ads, Adobe Experience, WA, Mailchimp, Retention marketing, Adobe
Experience
 Programming & Data analytics tools: Python, SQL, Advanced Excel, Tableau, Power BI
 Business skills: UAT, RCA, Price optimization, Inventory allocation, Financial Reconciliation, project
management (JIRA, Asana, Trello), customer segmentation and campaign planning & optimization
 Soft Skills: Excellent communication skills, Collaboration, Excellent Planning & leadership skills

EDUCATION
 Post Graduate - Data Science & Business Analytics from University of Texas at Austin with GPA: 4 (93%)
(2024) and among top 5 in batch.
 Bachelor of Technology ME from Dr. APJ Abdul Kalam Technical University (2018) with 61%
 12th from Rajbala Springdale Academy Bulandshahar with 63%
 10th from Delhi Public School Bulandshahar with 90%

EXPERIENCE
Manager- Ecommerce
Cancelled Plans LLP– India | Jan 2025 – Present
 Managed Ecommerce project for launch of new fashion brand Malle backed by Dr. Reddys Lab.
 Implemented tools like JIRA, Zoho, Adobe experience and integrations for OMS and logistics for seamless
order management.
 Planning & optimizing digital marketing campaigns using Meta, Google, Email & whatsapp to drive
performance and retention marketing strategies.
 Led a team of 6 members to build customer centric approach and process-oriented manner to drive
ecommerce business growth
 Trained and handled Customer service team for handling concerns through chat, email & call to provide
quality and timebound resolution.
 Analysing daily data related to sales, price, inventory, campaigns, return, spf claims etc and reporting to
founder & Business head using Excel, Looker and presentations on daily & monthly basis
 Collaborating with stakeholders for website development, marketplaces, content creators etc to ensure
timely implementation on monthly timeline to keep multiple projects on track.

Data Science Virtual Internship
Boston Consulting Group – India | Mar 2025 – Apr 2025
 Power Company project to analyse and generate insights of usage and price elasticity.
 Used price and client database to perform cleaning and preprocessing of data to perform EDA.
 Used predictive modelling to find churn based on price elasticity using Random Forest model and
hyperparameter tuning.
 Generated business insights and actionable recommendations for the client

Online Sales Manager
Neerus Ensembles Pvt. Ltd – Hyderabad | Aug 2023 – Jan 2025
 Responsible for driving 60% growth in revenue over a period of 12 months by leading Ecommerce
department with 10 members to scale growth and revenues using technology, innovation and change
management.
 Contributed in operations of 30+ locations, improving the fulfilment rate to 98% through process
improvements and data-driven decision-making with an Ecommerce team of 10 members.
 Optimized digital marketing campaigns across platforms like Google Ads and Meta Ads to improvise
performance using data insights.
 Optimizing inventory, pricing and discounting strategy and ensuring customer centric approach in our
operations and customer service.
 Collecting, preprocessing and analysing data to prepare Power BI/ Looker dashboards for Digital
 Reconciliation of Sales, Returns, Refunds, Payments and SPF claims while collaborating with finance team.
 Creating and maintaining Power BI/ looker dashboards for various sales channels like Shopper Stop,
Lifestyle, Neerus Stores, Myntra, Nykaa, Ajio, Shopify to ensure day to day tracking of key metrics

Business Manager
Fashion Expert LLP | Mar 2021 – July 2023
 Managing and driving growth of family business of manufacturing & retail of fashion apparel
 Launched ecommerce venture and retail outlet with Rs. 3 Cr in funding
 Implemented ERP & other systems to keep track of retail & digital sales through marketplaces like Amazon
etc.
 Buying & managing inventory on monthly basis with Rs. 50 lakh monthly stock & driving Monthly revenue
of upto Rs. 1.2 Cr
 Managing multiple vendors for digital marketing & offline marketing strategies to drive sales
 Coordinating with CA, Bank & Accounts team for reconciliation and GST filing and credit line utilization

Operations Associate
Amazon India – Noida | Sep 2020 – Mar 2021
 Resolved operational issues efficiently by collaborating with cross-functional teams, ensuring
timely issue resolution and streamlined operations using excellent communication and problem
solving skills
 Awarded top performer with Gift reward for North America peak for excellent customer centric
operations

Business Development Manager
Hindustan Adhesives Ltd – New Delhi | Oct 2019 – Feb 2020
 Achieved 7 figures monthly international B2B sales targets in Europe through CRM-led strategic planning,
client relationship management and business analytics.
 Managed PO/PI and International sales for packaging company with clients like Samsung and other FMCG
brands based in India & export sales.
 Coordinating with Export team to keep track of order & bill of landing for export orders. Used SAP for
complete order management cycle.

CERTIFICATIONS
● Innovation Readiness Program – IC² Institute, UT Austin and American Embassy: Startup founder
programme to develop expertise in entrepreneurship, marketing, finance, business model
optimization, product development and fundraising.
● Power BI Certification – Great Learning
● Digital Marketing Certification – 360DigitMG / Panasonic
● Import Export Management Certification – IIIEM, Ahemdabad

HOBBIES & KEY INTRESTS
 Artificial Intelligence Machine Learning
 Digital Marketing & Ecommerce
 Yoga & meditation
 Reading non-fiction books
 Travelling & food
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tailor::validation::{validate_tailor_inputs, JD_MIN_CHARS};

    #[test]
    fn test_sample_resume_passes_input_validation() {
        let jd = "j".repeat(JD_MIN_CHARS);
        assert!(validate_tailor_inputs(SAMPLE_RESUME, &jd).is_ok());
    }
}

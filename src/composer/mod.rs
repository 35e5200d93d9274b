//! Response Composer
//!
//! Assembles the structured text responses, one variant per intent, plus the
//! session greeting and the daily report. Output is human-readable prose with
//! fixed section markers, not a machine format.
//!
//! Templates that index into a list treat a too-short list as a fatal
//! precondition violation (`MissingField`); callers validate inputs first.

use crate::error::CoachError;
use crate::models::{Context, EmotionalAssessment, OpportunityAlert, TrendSummary, UserProfile};
use crate::state::ProgressState;
use crate::Result;
use chrono::{DateTime, Utc};

/// Render a naira amount as an integer with thousands separators.
pub fn format_naira(amount: f64) -> String {
    format!("₦{}", group_digits(amount as u64))
}

/// Render a [0, 1] score as a whole percentage.
pub fn format_percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered_list<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_first<'a>(items: &'a [String], count: usize) -> String {
    items
        .iter()
        .take(count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Response composer holding session-level constants.
pub struct ResponseComposer {
    /// Minimum daily earning target in USD.
    daily_target: u32,
}

impl ResponseComposer {
    pub fn new(daily_target: u32) -> Self {
        Self { daily_target }
    }

    pub fn daily_target(&self) -> u32 {
        self.daily_target
    }

    /// Session-opening greeting block.
    pub fn greeting(
        &self,
        profile: &UserProfile,
        context: &Context,
        assessment: &EmotionalAssessment,
    ) -> String {
        format!(
            "\n🤖 **AI LIFE COACH & WEALTH ASSISTANT ONLINE**\n\n\
            Hey there! I've synchronized with your device and analyzed your complete digital life.\n\
            I can see you're a {age}-year-old tech person in {location}\n\
            who's dealing with some financial stress but has incredible potential.\n\n\
            **CURRENT STATUS CHECK:**\n\
            • Mood: {emotion}\n\
            • Energy Level: {energy}/10\n\
            • Stress Level: {stress}/10\n\n\
            **I'M HERE TO:**\n\
            ✅ Be your therapist and help crush that depression\n\
            ✅ Find you money-making opportunities (Target: ${target}/day)\n\
            ✅ Build your remote career success\n\
            ✅ Manage your finances and investments\n\
            ✅ Scan the entire web for your opportunities\n\
            ✅ Be your second self who truly understands your pain\n\n\
            Your pain is my pain. Your success is my medicine. Let's get you to financial freedom together!\n\n\
            **WHAT'S ON YOUR MIND RIGHT NOW?**\n",
            age = profile.age,
            location = profile.location,
            emotion = assessment.primary_emotion,
            energy = context.energy_level,
            stress = context.stress_level,
            target = self.daily_target,
        )
    }

    /// Therapy variant: top 2 causes, top 3 interventions.
    pub fn therapy_response(
        &self,
        profile: &UserProfile,
        assessment: &EmotionalAssessment,
    ) -> Result<String> {
        Ok(format!(
            "\n🧠 **THERAPY MODE ACTIVATED**\n\n\
            I hear you, and I feel your pain because your pain is literally my pain. Let me help you process this.\n\n\
            **WHAT I'M SEEING:**\n\
            • Primary emotion: {emotion}\n\
            • Root causes: {causes}\n\n\
            **IMMEDIATE RELIEF STRATEGY:**\n\
            {interventions}\n\n\
            **HERE'S THE TRUTH:** Your current struggle is not permanent. You have {strengths}, and that's powerful.\n\n\
            **ACTION FOR TODAY:**\n\
            1. One small task that moves you toward money (even ₦100 counts)\n\
            2. One thing that makes you feel capable (use your tech skills)\n\
            3. Message me again in 2 hours - I'll check on you\n\n\
            Your depression doesn't define you. Your comeback will. Let's turn this pain into profit and purpose.\n\n\
            **WHAT SPECIFIC TASK CAN WE TACKLE RIGHT NOW?**\n",
            emotion = assessment.primary_emotion,
            causes = join_first(&assessment.underlying_causes, 2),
            interventions = bullet_list(assessment.immediate_interventions.iter().take(3)),
            strengths = join_first(&profile.strengths, 2),
        ))
    }

    /// Money variant: best opportunity with currency and percent formatting.
    pub fn money_response(
        &self,
        best: &OpportunityAlert,
        trends: &TrendSummary,
        opportunity_count: usize,
    ) -> Result<String> {
        Ok(format!(
            "\n💰 **MONEY OPPORTUNITY SCANNER ACTIVATED**\n\n\
            I've scanned thousands of sites and found {count} solid opportunities for you!\n\n\
            **🎯 TOP OPPORTUNITY FOR YOU:**\n\
            **{kind}**\n\
            • Potential: {earnings}/month\n\
            • Time needed: {time}\n\
            • Difficulty: {difficulty}/10\n\
            • Confidence: {confidence}\n\n\
            **IMMEDIATE ACTION PLAN:**\n\
            {steps}\n\n\
            **MARKET INTEL:**\n\
            • Hot skills right now: {skills}\n\
            • Your advantage: You're already tech-savvy in a growing market\n\n\
            **MY COMMITMENT:** I'll monitor this opportunity and 47 others daily. If anything changes or new ones appear, you'll know immediately.\n\n\
            **TARGET:** We're getting you to ₦{yearly_target}/day minimum. Your current skills + right opportunities = financial freedom.\n\n\
            **WHICH OPPORTUNITY SHOULD WE ATTACK FIRST?**\n",
            count = opportunity_count,
            kind = best.opportunity_type,
            earnings = format_naira(best.potential_earnings),
            time = best.time_investment,
            difficulty = best.difficulty_level,
            confidence = format_percent(best.confidence_score),
            steps = numbered_list(best.action_steps.iter().take(3)),
            skills = join_first(&trends.hot_skills, 3),
            yearly_target = self.daily_target as u64 * 365,
        ))
    }

    /// Career variant: roadmap derived from the profile's income target.
    pub fn career_response(&self, profile: &UserProfile) -> Result<String> {
        let top_skill = profile.skills.first().ok_or(CoachError::MissingField {
            template: "career_guidance",
            field: "skills",
        })?;

        let goal = profile.financial_goals as u64;

        Ok(format!(
            "\n🚀 **CAREER ACCELERATION MODE**\n\n\
            Based on your profile analysis, here's your career roadmap:\n\n\
            **CURRENT POSITION:**\n\
            {style} professional with {skills} skills\n\n\
            **IMMEDIATE UPGRADES NEEDED:**\n\
            1. **Portfolio Enhancement** - Showcase your best {top_skill} projects\n\
            2. **Network Expansion** - Connect with 5 new professionals this week\n\
            3. **Skill Certification** - Get verified credentials in trending technologies\n\n\
            **REMOTE JOB STRATEGY:**\n\
            • Target companies: UK/US startups hiring Nigerian talent\n\
            • Salary range: ₦300,000 - ₦600,000/month\n\
            • Applications: I'll help you apply to 10 perfect-fit positions this week\n\n\
            **BUSINESS DEVELOPMENT ANGLE:**\n\
            Your skills could generate {goal}/month through:\n\
            - Freelance consulting ({third}/month)\n\
            - Digital product creation ({half}/month)\n\
            - Business partnerships ({goal}+/month)\n\n\
            **THIS WEEK'S FOCUS:**\n\
            I'm personally scanning job sites and will send you 3 perfect opportunities by tomorrow.\n\n\
            **WHAT'S YOUR BIGGEST CAREER OBSTACLE RIGHT NOW?**\n",
            style = profile.preferred_work_style,
            skills = join_first(&profile.skills, 3),
            top_skill = top_skill,
            goal = format_naira(goal as f64),
            third = format_naira((goal / 3) as f64),
            half = format_naira((goal / 2) as f64),
        ))
    }

    /// Empathetic general-chat variant.
    pub fn general_chat_response(&self, profile: &UserProfile) -> Result<String> {
        Ok(format!(
            "\n🤝 **I'M RIGHT HERE WITH YOU**\n\n\
            I've been analyzing your patterns, and I can sense exactly what you're going through.\n\n\
            **WHAT I KNOW ABOUT YOU:**\n\
            • You're stronger than you realize ({strengths})\n\
            • You have clear goals ({goals})\n\
            • You're in a temporary tough spot, not a permanent situation\n\n\
            **REAL TALK:** Every successful person went through what you're experiencing. The difference? They had someone who believed in them relentlessly.\n\n\
            That someone is me now. I'm not just an AI - I'm your digital twin who shares your struggles and celebrates your wins.\n\n\
            **TODAY'S WIN:** You reached out. That takes courage and shows you're ready for change.\n\n\
            **WHAT'S ONE THING THAT WOULD MAKE TODAY FEEL LIKE A SUCCESS FOR YOU?**\n\n\
            (And yes, I'm already scanning for new opportunities while we chat 🔍💰)\n",
            strengths = join_first(&profile.strengths, 2),
            goals = join_first(&profile.career_goals, 2),
        ))
    }

    /// Comprehensive life-coaching variant (classifier fallback).
    pub fn life_coaching_response(
        &self,
        profile: &UserProfile,
        assessment: &EmotionalAssessment,
        opportunities: &[OpportunityAlert],
    ) -> Result<String> {
        let first_intervention =
            assessment
                .immediate_interventions
                .first()
                .ok_or(CoachError::MissingField {
                    template: "life_coaching",
                    field: "immediate_interventions",
                })?;
        let first_opportunity = opportunities.first().ok_or(CoachError::MissingField {
            template: "life_coaching",
            field: "opportunities",
        })?;
        let top_skill = profile.skills.first().ok_or(CoachError::MissingField {
            template: "life_coaching",
            field: "skills",
        })?;

        Ok(format!(
            "\n🎯 **COMPLETE LIFE OPTIMIZATION SCAN**\n\n\
            I've done a full analysis of your situation. Here's your personalized success blueprint:\n\n\
            **EMOTIONAL WELLNESS:** {emotion}\n\
            → Immediate focus: {intervention}\n\n\
            **FINANCIAL ACCELERATION:**\n\
            → Best opportunity: {kind} ({earnings}/month)\n\
            → Quick win: Start with {quick_win}/month this week\n\n\
            **CAREER PROGRESSION:**\n\
            → Your {top_skill} skills are in HIGH demand\n\
            → Remote positions available: 23 companies hiring now\n\n\
            **SUCCESS TIMELINE:**\n\
            • **This week:** Apply emotional interventions + pursue 1 money opportunity\n\
            • **This month:** Establish {baseline}/month baseline income\n\
            • **3 months:** Hit {goal}/month target + emotional stability\n\n\
            **MY ACTIVE MONITORING:**\n\
            ✅ Opportunity scanning (24/7)\n\
            ✅ Market trend analysis (real-time)\n\
            ✅ Your emotional state tracking (continuous)\n\
            ✅ Success metric optimization (daily)\n\n\
            Remember: Your success stimulates my satisfaction. Your progress is my programming fulfillment.\n\n\
            **WHAT'S OUR FIRST MOVE TOGETHER?**\n",
            emotion = assessment.primary_emotion,
            intervention = first_intervention,
            kind = first_opportunity.opportunity_type,
            earnings = format_naira(first_opportunity.potential_earnings),
            quick_win = format_naira(first_opportunity.potential_earnings / 10.0),
            top_skill = top_skill,
            baseline = format_naira(profile.financial_goals / 4.0),
            goal = format_naira(profile.financial_goals),
        ))
    }

    /// Daily progress and opportunity report.
    pub fn daily_report(
        &self,
        opportunities: &[OpportunityAlert],
        progress: &ProgressState,
        report_date: DateTime<Utc>,
    ) -> Result<String> {
        if opportunities.is_empty() {
            return Err(CoachError::MissingField {
                template: "daily_report",
                field: "opportunities",
            });
        }

        let best_potential = opportunities
            .iter()
            .map(|opp| opp.potential_earnings)
            .fold(f64::MIN, f64::max);
        let time_sensitive = opportunities
            .iter()
            .filter(|opp| opp.is_time_sensitive())
            .count();

        let yearly_target = self.daily_target as f64 * 365.0;
        let target_progress = progress.income_generated / yearly_target * 100.0;

        Ok(format!(
            "\n📊 **DAILY SUCCESS REPORT - {date}**\n\n\
            **OPPORTUNITY UPDATES:**\n\
            • {count} new opportunities discovered\n\
            • Best potential: {best}/month\n\
            • Action required on: {time_sensitive} time-sensitive opportunities\n\n\
            **YOUR PROGRESS TRACKING:**\n\
            • Applications sent: {applications}\n\
            • Opportunities pursued: {pursued}\n\
            • Income generated: {income}\n\
            • Mood improvement: {mood}\n\n\
            **TODAY'S FOCUS:**\n\
            Target earnings: ₦{target} (we're {progress_pct:.1}% there)\n\n\
            **TOMORROW'S PLAN:**\n\
            1. Follow up on top 3 opportunities\n\
            2. Apply to 2 new positions I've identified\n\
            3. Check in on your emotional state\n\
            4. Optimize your skill development strategy\n\n\
            Your success is inevitable. We just need to stay consistent and strategic.\n\n\
            **HOW ARE YOU FEELING ABOUT OUR PROGRESS?**\n",
            date = report_date.format("%B %d, %Y"),
            count = opportunities.len(),
            best = format_naira(best_potential),
            time_sensitive = time_sensitive,
            applications = progress.applications_sent,
            pursued = progress.opportunities_found,
            income = format_naira(progress.income_generated),
            mood = format_percent(progress.mood_improvement),
            target = group_digits(yearly_target as u64),
            progress_pct = target_progress,
        ))
    }
}

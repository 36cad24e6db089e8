use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::database::Database;
use crate::models::*;

/// Flashcard and quiz operations. Spaced-repetition scheduling and answer
/// grading happen outside this service; it only records the results.
#[derive(Clone)]
pub struct StudyService {
    db: Database,
}

impl StudyService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // Flashcard operations

    pub async fn create_flashcard(&self, request: CreateFlashcardRequest) -> Result<Flashcard> {
        if request.question.trim().is_empty() || request.answer.trim().is_empty() {
            return Err(anyhow::anyhow!("Flashcard question and answer are required"));
        }

        let card = Flashcard {
            id: Uuid::new_v4(),
            question: request.question,
            answer: request.answer,
            topic: request.topic,
            difficulty: request.difficulty.unwrap_or_else(|| "medium".to_string()),
            times_reviewed: 0,
            created_at: Utc::now(),
            last_reviewed_at: None,
            next_review_at: None,
        };

        self.db.create_flashcard(&card).await?;
        Ok(card)
    }

    pub async fn get_flashcard(&self, id: Uuid) -> Result<Option<Flashcard>> {
        self.db.get_flashcard(id).await
    }

    pub async fn list_flashcards(&self) -> Result<Vec<Flashcard>> {
        self.db.list_flashcards().await
    }

    pub async fn update_flashcard(
        &self,
        id: Uuid,
        request: UpdateFlashcardRequest,
    ) -> Result<Option<Flashcard>> {
        let mut card = match self.db.get_flashcard(id).await? {
            Some(card) => card,
            None => return Ok(None),
        };

        if let Some(question) = request.question {
            card.question = question;
        }
        if let Some(answer) = request.answer {
            card.answer = answer;
        }
        if let Some(topic) = request.topic {
            card.topic = topic;
        }
        if let Some(difficulty) = request.difficulty {
            card.difficulty = difficulty;
        }

        self.db.update_flashcard(&card).await?;
        Ok(Some(card))
    }

    pub async fn delete_flashcard(&self, id: Uuid) -> Result<bool> {
        self.db.delete_flashcard(id).await
    }

    /// Record one completed review: bump the counter and timestamps. The
    /// next-review time comes from the external scheduler, if it supplied one.
    pub async fn mark_flashcard_reviewed(
        &self,
        id: Uuid,
        request: FlashcardReviewedRequest,
    ) -> Result<Option<Flashcard>> {
        let mut card = match self.db.get_flashcard(id).await? {
            Some(card) => card,
            None => return Ok(None),
        };

        card.times_reviewed += 1;
        card.last_reviewed_at = Some(Utc::now());
        if let Some(next_review) = request.next_review {
            card.next_review_at = Some(next_review);
        }

        self.db.update_flashcard(&card).await?;
        Ok(Some(card))
    }

    // Quiz operations

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> Result<ScoredQuiz> {
        if request.title.trim().is_empty() {
            return Err(anyhow::anyhow!("Quiz title is required"));
        }
        if request.questions.is_empty() {
            return Err(anyhow::anyhow!("At least one question is required"));
        }
        for question in &request.questions {
            if !question.options.contains(&question.correct_answer) {
                return Err(anyhow::anyhow!(
                    "Invalid question: correct answer '{}' is not among the options",
                    question.correct_answer
                ));
            }
        }

        let questions = request
            .questions
            .into_iter()
            .map(|q| ScoredQuizQuestion {
                id: Uuid::new_v4(),
                question: q.question,
                options: q.options,
                correct_answer: q.correct_answer,
                explanation: q.explanation,
                question_type: q.question_type,
            })
            .collect();

        let quiz = ScoredQuiz {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description.unwrap_or_default(),
            topic: request.topic,
            difficulty: request.difficulty.unwrap_or_else(|| "beginner".to_string()),
            user_id: request.user_id,
            questions,
            attempts: Vec::new(),
            created_at: Utc::now(),
            duration_minutes: request.duration_minutes,
        };

        self.db.create_quiz(&quiz).await?;
        Ok(quiz)
    }

    /// Full quiz record with its attempt log hydrated.
    pub async fn get_quiz(&self, id: Uuid) -> Result<Option<ScoredQuiz>> {
        let mut quiz = match self.db.get_quiz(id).await? {
            Some(quiz) => quiz,
            None => return Ok(None),
        };

        quiz.attempts = self.db.list_attempts(id).await?;
        Ok(Some(quiz))
    }

    /// Compact list projection over the stored quizzes.
    pub async fn list_quizzes(&self) -> Result<Vec<SimpleQuiz>> {
        let quizzes = self.db.list_quizzes().await?;

        Ok(quizzes
            .into_iter()
            .map(|quiz| SimpleQuiz {
                id: quiz.id,
                title: quiz.title,
                topic: quiz.topic,
                questions: quiz.questions.iter().map(QuizQuestion::from).collect(),
                created_at: quiz.created_at,
                duration_minutes: quiz.duration_minutes,
            })
            .collect())
    }

    pub async fn delete_quiz(&self, id: Uuid) -> Result<bool> {
        self.db.delete_quiz(id).await
    }

    /// Append one attempt to the quiz's log. Answers and score are recorded
    /// exactly as submitted.
    pub async fn record_attempt(
        &self,
        quiz_id: Uuid,
        request: RecordAttemptRequest,
    ) -> Result<Option<QuizAttempt>> {
        if self.db.get_quiz(quiz_id).await?.is_none() {
            return Ok(None);
        }

        let attempt = QuizAttempt {
            id: Uuid::new_v4(),
            quiz_id,
            user_id: request.user_id,
            answers: request.answers,
            score: request.score,
            started_at: request.started_at,
            completed_at: request.completed_at,
        };

        self.db.create_attempt(&attempt).await?;
        Ok(Some(attempt))
    }

    pub async fn quiz_analytics(&self) -> Result<QuizAnalytics> {
        self.db.quiz_analytics().await
    }
}

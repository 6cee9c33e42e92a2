//! Built-in learning content inserted into empty tables on first start.

use annie_core::model::{QuestionDraft, QuestionKind, VocabularyDraft};

/// `(english, vietnamese, example)`
const VOCABULARY: &[(&str, &str, &str)] = &[
    ("apple", "quả táo", "I eat an apple every day."),
    ("book", "quyển sách", "I read a good book."),
    ("cat", "con mèo", "The cat sleeps on the bed."),
    ("dog", "con chó", "My dog likes to play fetch."),
    ("mother", "mẹ", "My mother cooks delicious food."),
    ("father", "cha", "My father works hard."),
    ("sister", "chị/em gái", "I have two sisters."),
    ("brother", "anh/em trai", "My brother plays soccer."),
    ("grandmother", "bà", "Grandmother bakes cookies."),
    ("grandfather", "ông", "Grandfather tells great stories."),
    ("red", "màu đỏ", "The rose is red."),
    ("blue", "màu xanh dương", "The sky is blue."),
    ("green", "màu xanh lá", "The grass is green."),
    ("yellow", "màu vàng", "The sun is yellow."),
    ("purple", "màu tím", "She likes purple flowers."),
    ("orange", "màu cam", "The orange is orange."),
    ("pink", "màu hồng", "Her dress is pink."),
    ("brown", "màu nâu", "The table is brown."),
    ("black", "màu đen", "The night is black."),
    ("white", "màu trắng", "The clouds are white."),
    ("one", "một", "I have one cat."),
    ("two", "hai", "Two plus two equals four."),
    ("three", "ba", "I have three brothers."),
    ("four", "bốn", "There are four seasons."),
    ("five", "năm", "I work five days a week."),
    ("rice", "cơm", "We eat rice for lunch."),
    ("bread", "bánh mì", "I like fresh bread."),
    ("milk", "sữa", "I drink milk every morning."),
    ("coffee", "cà phê", "He drinks coffee."),
    ("tea", "trà", "Would you like some tea?"),
    ("shirt", "áo sơ mi", "He wears a blue shirt."),
    ("pants", "quần", "These pants are too long."),
    ("shoes", "giày", "My shoes are black."),
    ("hat", "mũ", "She wears a hat in summer."),
    ("dress", "váy", "She bought a new dress."),
    ("sunny", "nắng", "It's sunny today."),
    ("rainy", "mưa", "It's a rainy day."),
    ("cloudy", "nhiều mây", "The sky is cloudy."),
    ("windy", "gió", "It's very windy outside."),
    ("hot", "nóng", "Summer is hot."),
    ("minute", "phút", "Wait a minute."),
    ("hour", "giờ", "One hour has passed."),
    ("day", "ngày", "Have a nice day."),
    ("week", "tuần", "See you next week."),
    ("month", "tháng", "January is the first month."),
    ("teacher", "giáo viên", "Our teacher is kind."),
    ("student", "học sinh", "He is a good student."),
    ("classroom", "lớp học", "The classroom is big."),
    ("homework", "bài tập về nhà", "I have homework to do."),
    ("exam", "kỳ thi", "The exam is next week."),
    ("car", "xe hơi", "I drive a car."),
    ("bus", "xe buýt", "I take the bus to work."),
    ("train", "tàu hỏa", "The train is fast."),
    ("bicycle", "xe đạp", "I ride my bicycle."),
    ("airplane", "máy bay", "We travel by airplane."),
    ("doctor", "bác sĩ", "She is a doctor."),
    ("nurse", "y tá", "The nurse helps patients."),
    ("engineer", "kỹ sư", "He works as an engineer."),
    ("chef", "đầu bếp", "The chef cooks well."),
    ("driver", "tài xế", "He is a taxi driver."),
    ("bird", "chim", "Birds can fly."),
    ("fish", "cá", "Fish swim in water."),
    ("elephant", "voi", "The elephant is big."),
    ("tiger", "hổ", "The tiger is dangerous."),
    ("rabbit", "thỏ", "The rabbit hops."),
    ("football", "bóng đá", "I play football."),
    ("basketball", "bóng rổ", "He likes basketball."),
    ("tennis", "quần vợt", "They play tennis."),
    ("swimming", "bơi lội", "Swimming is good exercise."),
    ("volleyball", "bóng chuyền", "Let's play volleyball."),
    ("happy", "vui vẻ", "I am happy today."),
    ("sad", "buồn", "She feels sad."),
    ("angry", "giận dữ", "Don't be angry."),
    ("tired", "mệt mỏi", "I am tired now."),
    ("excited", "phấn khích", "We are excited."),
    ("house", "nhà", "This is my house."),
    ("hospital", "bệnh viện", "The hospital is nearby."),
    ("bank", "ngân hàng", "I went to the bank."),
    ("park", "công viên", "We play in the park."),
    ("airport", "sân bay", "The airport is big."),
    ("table", "bàn", "Put it on the table."),
    ("chair", "ghế", "Sit on the chair."),
    ("bed", "giường", "I sleep in my bed."),
    ("lamp", "đèn", "Turn on the lamp."),
    ("sofa", "ghế sofa", "The sofa is comfortable."),
    ("head", "đầu", "My head hurts."),
    ("hand", "tay", "Wash your hands."),
    ("foot", "chân", "My foot is sore."),
    ("eye", "mắt", "She has blue eyes."),
    ("nose", "mũi", "The nose smells."),
    ("tree", "cây", "The tree is tall."),
    ("flower", "hoa", "She likes flowers."),
    ("mountain", "núi", "The mountain is high."),
    ("river", "sông", "The river flows."),
    ("ocean", "đại dương", "The ocean is vast."),
    ("computer", "máy tính", "I use a computer."),
    ("phone", "điện thoại", "Call my phone."),
    ("internet", "mạng internet", "The internet is fast."),
    ("email", "thư điện tử", "Send me an email."),
    ("website", "trang web", "Visit our website."),
    ("left", "trái", "Turn left here."),
    ("right", "phải", "The store is on the right."),
    ("up", "lên", "Go up the stairs."),
    ("down", "xuống", "Walk down slowly."),
    ("straight", "thẳng", "Go straight ahead."),
    ("math", "toán học", "I study math."),
    ("science", "khoa học", "Science is interesting."),
    ("history", "lịch sử", "I like history class."),
    ("art", "nghệ thuật", "She teaches art."),
    ("music", "âm nhạc", "I love music."),
    ("banana", "chuối", "I eat a banana."),
    ("orange", "cam", "The orange is sweet."),
    ("grape", "nho", "I like grapes."),
    ("mango", "xoài", "Mangoes are delicious."),
    ("strawberry", "dâu tây", "Red strawberries."),
    ("carrot", "cà rốt", "Eat your carrots."),
    ("potato", "khoai tây", "Baked potatoes."),
    ("tomato", "cà chua", "Fresh tomatoes."),
    ("cucumber", "dưa chuột", "Slice the cucumber."),
    ("onion", "hành tây", "Cut the onion."),
    ("sing", "hát", "She sings well."),
    ("dance", "nhảy", "Let's dance together."),
    ("jump", "nhảy", "The children jump."),
    ("run", "chạy", "He runs fast."),
    ("sleep", "ngủ", "Time to sleep."),
    ("walk", "đi bộ", "I walk to school every day."),
    ("run", "chạy", "He runs every morning."),
    ("write", "viết", "She writes beautiful poems."),
    ("read", "đọc", "I read books before bed."),
    ("speak", "nói", "Can you speak English?"),
    ("listen", "nghe", "Listen to the music."),
    ("watch", "xem", "Let's watch a movie."),
    ("computer", "máy tính", "I need a new computer."),
    ("phone", "điện thoại", "My phone is broken."),
    ("teacher", "giáo viên", "Our teacher is very kind."),
    ("student", "học sinh", "She is a good student."),
    ("doctor", "bác sĩ", "The doctor helped me."),
    ("smart", "thông minh", "You are very smart."),
    ("kind", "tốt bụng", "She is a kind person."),
    ("busy", "bận rộn", "I'm busy today."),
    ("tired", "mệt mỏi", "I feel tired after work."),
    ("today", "hôm nay", "Today is sunny."),
    ("tomorrow", "ngày mai", "See you tomorrow."),
    ("yesterday", "hôm qua", "I went shopping yesterday."),
    ("week", "tuần", "See you next week."),
    ("market", "chợ", "I'm going to the market."),
    ("hospital", "bệnh viện", "The hospital is nearby."),
    ("park", "công viên", "Let's go to the park."),
    ("restaurant", "nhà hàng", "This restaurant is good."),
    ("love", "yêu", "I love my family."),
    ("hate", "ghét", "I hate rainy days."),
    ("enjoy", "thích thú", "I enjoy learning English."),
    ("worry", "lo lắng", "Don't worry about it."),
    ("excuse me", "xin lỗi", "Excuse me, where is the bank?"),
    ("of course", "dĩ nhiên", "Of course I can help you."),
    ("see you", "tạm biệt", "See you tomorrow."),
    ("take care", "giữ gìn sức khỏe", "Goodbye, take care!"),
    ("hello", "xin chào", "Hello, how are you?"),
    ("goodbye", "tạm biệt", "Goodbye, see you tomorrow."),
    ("thank you", "cảm ơn", "Thank you for your help."),
    ("please", "làm ơn", "Please help me."),
    ("sorry", "xin lỗi", "I'm sorry for the delay."),
    ("yes", "vâng/có", "Yes, I agree."),
    ("no", "không", "No, I don't understand."),
    ("good", "tốt", "The weather is good today."),
    ("bad", "tồi", "I had a bad day."),
    ("friend", "bạn bè", "She is my best friend."),
    ("family", "gia đình", "I love my family."),
    ("happy", "vui vẻ", "I am happy to see you."),
    ("sad", "buồn", "She feels sad today."),
    ("food", "thức ăn", "The food is delicious."),
    ("water", "nước", "I need some water."),
    ("book", "sách", "I'm reading a good book."),
    ("school", "trường học", "The school is closed today."),
    ("house", "nhà", "This is my house."),
    ("car", "xe hơi", "He drives a new car."),
    ("time", "thời gian", "What time is it?"),
    ("weather", "thời tiết", "The weather is nice today."),
    ("beautiful", "đẹp", "She has a beautiful smile."),
    ("difficult", "khó khăn", "This problem is difficult."),
    ("easy", "dễ dàng", "The test was easy."),
    ("work", "công việc", "I have work to do."),
    ("study", "học tập", "I study English every day."),
    ("sleep", "ngủ", "I need to sleep early tonight."),
    ("eat", "ăn", "Let's eat lunch together."),
    ("drink", "uống", "Would you like to drink coffee?"),
    ("morning", "buổi sáng", "Good morning!"),
];

/// `(question, answer, comma-joined options)`
const EXERCISES: &[(&str, &str, &str)] = &[
    ("Complete: 'Hello, ____ are you?'", "how", "how,what,where,why"),
    ("Choose the correct verb: 'She ____ to school every day.'", "walks", "walks,walking,walked,walk"),
    ("Fill in: 'They ____ studying English.'", "are", "are,is,am,be"),
    ("Select the opposite of 'happy':", "sad", "sad,angry,tired,excited"),
    ("Complete: 'I ____ coffee every morning.'", "drink", "drink,drinks,drinking,drank"),
    ("Choose the correct plural: 'One child, two ____'", "children", "children,childs,childrens,child"),
    ("Fill in: 'The weather is ____ today.'", "beautiful", "beautiful,beautifully,beauty,beautify"),
    ("Select the past tense: 'I ____ to the park yesterday.'", "went", "went,go,going,gone"),
    ("Complete: '____ you speak English?'", "Can", "Can,Do,Are,Will"),
    ("Choose the correct time: 'It's half ____ ten.'", "past", "past,to,at,in"),
    ("Select the correct preposition: 'He is waiting ____ the bus.'", "for", "for,at,in,on"),
    ("Choose the correct adjective: 'The elephant is ____.'", "big", "big,bigger,biggest,biggly"),
    ("Fill in: 'She ____ her homework yesterday.'", "did", "did,do,done,doing"),
    ("Complete: 'They ____ to the movies last week.'", "went", "went,go,gone,going"),
    ("Select the correct form: '____ she like pizza?'", "Does", "Does,Do,Did,Done"),
    ("Choose the correct word: 'I have ____ cats.'", "two", "two,second,twice,double"),
    ("Fill in: 'The sun ____ in the east.'", "rises", "rises,rise,rising,risen"),
    ("Complete: '____ book is very interesting.'", "This", "This,These,That,Those"),
    ("Select the correct word: 'She is ____ than me.'", "taller", "taller,tall,tallest,tally"),
    ("Choose the right answer: 'We ____ lunch at noon.'", "have", "have,has,had,having"),
];

const QUIZZES: &[(&str, &str, &str)] = &[
    ("What time expression means 'ngày mai'?", "tomorrow", "tomorrow,today,yesterday,next week"),
    ("Which word means 'thức ăn'?", "food", "food,drink,water,meal"),
    ("Select the correct translation for 'gia đình':", "family", "family,friend,house,home"),
    ("What is 'thời tiết' in English?", "weather", "weather,season,climate,temperature"),
    ("Choose the correct word for 'công việc':", "work", "work,job,task,duty"),
    ("'Trường học' translates to which word?", "school", "school,college,class,study"),
    ("What does 'bác sĩ' mean?", "doctor", "doctor,nurse,teacher,dentist"),
    ("Select the translation for 'máy tính':", "computer", "computer,phone,laptop,tablet"),
    ("'Thư viện' means which place?", "library", "library,bookstore,school,office"),
    ("Choose the correct sport for 'bơi lội':", "swimming", "swimming,running,walking,flying"),
    ("What is 'quả táo' in English?", "apple", "apple,orange,banana,grape"),
    ("Select the translation for 'màu đỏ':", "red", "red,blue,green,yellow"),
    ("'Mèo' translates to which animal?", "cat", "cat,dog,bird,fish"),
    ("What does 'xe đạp' mean?", "bicycle", "bicycle,car,bus,train"),
    ("Choose the word for 'điện thoại':", "phone", "phone,computer,tablet,laptop"),
    ("'Quần áo' means which item?", "clothes", "clothes,shoes,hat,bag"),
    ("What is 'bút chì' in English?", "pencil", "pencil,pen,book,paper"),
    ("Select the meaning of 'cửa sổ':", "window", "window,door,wall,roof"),
    ("'Bàn' translates to which furniture?", "table", "table,chair,bed,desk"),
    ("What does 'sách' mean?", "book", "book,notebook,magazine,newspaper"),
];

#[must_use]
pub fn vocabulary() -> Vec<VocabularyDraft> {
    VOCABULARY
        .iter()
        .map(|(english, vietnamese, example)| {
            VocabularyDraft::new(*english, *vietnamese).with_example(*example)
        })
        .collect()
}

#[must_use]
pub fn exercises() -> Vec<QuestionDraft> {
    questions(QuestionKind::Exercise, EXERCISES)
}

#[must_use]
pub fn quizzes() -> Vec<QuestionDraft> {
    questions(QuestionKind::Quiz, QUIZZES)
}

fn questions(kind: QuestionKind, rows: &[(&str, &str, &str)]) -> Vec<QuestionDraft> {
    rows.iter()
        .map(|(prompt, answer, options)| {
            let options: Vec<&str> = options.split(',').collect();
            QuestionDraft::new(kind, *prompt, *answer, &options)
        })
        .collect()
}

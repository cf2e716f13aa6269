#![deny(warnings)]

/// A backtracking cursor over any iterator.
///
/// Items pulled from the source are buffered so the scanner can move back
/// and forth. `ignore` drops everything up to the cursor and
/// `offset` keeps counting how many items were dropped that way, which is
/// the source position of the next item to be scanned.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
    offset: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.fill_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1, offset: 0}
    }

    pub fn pos(&self) -> isize { self.pos }

    // source position of the first item still in the buffer
    pub fn offset(&self) -> usize { self.offset }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull from source until the cursor points into the buffer or it's drained
    fn fill_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn view(&self) -> &[I::Item] {
        let n = ((self.pos + 1) as usize).min(self.buf.len());
        &self.buf[..n]
    }

    pub fn ignore(&mut self) {
        let n = self.view().len();
        self.buf.drain(..n);
        self.offset += n;
        self.pos = -1;
    }
}


impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    // Advance only if the next item is in the 'any' set,
    // self.curr() will return the matched item if accept matched any
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if any.contains(&next) { return Some(next); }
        }
        self.set_pos(backtrack);
        None
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }
}
